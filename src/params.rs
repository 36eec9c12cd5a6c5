//! Host-side mirror of the engine's parameter block.

use csnd_sys as raw;
use libc::c_int;

/// Snapshot of the engine tunables, bit-mapped onto the native
/// `CSOUND_PARAMS` record.
///
/// The block is read and written as a whole: there are no per-field setters
/// beyond the [`Csound::set_debug`](crate::Csound::set_debug) convenience
/// pair, because the native layer has no partial-update call. Fields not
/// explicitly assigned before [`Csound::set_params`](crate::Csound::set_params)
/// keep whatever the last [`Csound::get_params`](crate::Csound::get_params)
/// read into them, so always read before writing unless the intent is to
/// overwrite the whole block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsoundParams {
    pub debug_mode: i32,
    pub buffer_frames: i32,
    pub hardware_buffer_frames: i32,
    pub displays: i32,
    pub ascii_graphs: i32,
    pub postscript_graphs: i32,
    pub message_level: i32,
    pub tempo: i32,
    pub ring_bell: i32,
    pub use_cscore: i32,
    pub terminate_on_midi: i32,
    pub heartbeat: i32,
    pub defer_gen01_load: i32,
    pub midi_key: i32,
    pub midi_key_cps: i32,
    pub midi_key_oct: i32,
    pub midi_key_pch: i32,
    pub midi_velocity: i32,
    pub midi_velocity_amp: i32,
    pub no_default_paths: i32,
    pub number_of_threads: i32,
    pub syntax_check_only: i32,
    pub csd_line_counts: i32,
    pub compute_weights: i32,
    pub realtime_mode: i32,
    pub sample_accurate: i32,
    pub sample_rate_override: f64,
    pub control_rate_override: f64,
    pub nchnls_override: i32,
    pub nchnls_i_override: i32,
    pub e0dbfs_override: f64,
    pub daemon: i32,
    pub ksmps_override: i32,
    pub fft_library: i32,
}

impl CsoundParams {
    pub(crate) fn to_raw(&self) -> raw::CSOUND_PARAMS {
        raw::CSOUND_PARAMS {
            debug_mode: self.debug_mode as c_int,
            buffer_frames: self.buffer_frames as c_int,
            hardware_buffer_frames: self.hardware_buffer_frames as c_int,
            displays: self.displays as c_int,
            ascii_graphs: self.ascii_graphs as c_int,
            postscript_graphs: self.postscript_graphs as c_int,
            message_level: self.message_level as c_int,
            tempo: self.tempo as c_int,
            ring_bell: self.ring_bell as c_int,
            use_cscore: self.use_cscore as c_int,
            terminate_on_midi: self.terminate_on_midi as c_int,
            heartbeat: self.heartbeat as c_int,
            defer_gen01_load: self.defer_gen01_load as c_int,
            midi_key: self.midi_key as c_int,
            midi_key_cps: self.midi_key_cps as c_int,
            midi_key_oct: self.midi_key_oct as c_int,
            midi_key_pch: self.midi_key_pch as c_int,
            midi_velocity: self.midi_velocity as c_int,
            midi_velocity_amp: self.midi_velocity_amp as c_int,
            no_default_paths: self.no_default_paths as c_int,
            number_of_threads: self.number_of_threads as c_int,
            syntax_check_only: self.syntax_check_only as c_int,
            csd_line_counts: self.csd_line_counts as c_int,
            compute_weights: self.compute_weights as c_int,
            realtime_mode: self.realtime_mode as c_int,
            sample_accurate: self.sample_accurate as c_int,
            sample_rate_override: self.sample_rate_override,
            control_rate_override: self.control_rate_override,
            nchnls_override: self.nchnls_override as c_int,
            nchnls_i_override: self.nchnls_i_override as c_int,
            e0dbfs_override: self.e0dbfs_override,
            daemon: self.daemon as c_int,
            ksmps_override: self.ksmps_override as c_int,
            FFT_library: self.fft_library as c_int,
        }
    }

    pub(crate) fn fill_from_raw(&mut self, p: &raw::CSOUND_PARAMS) {
        self.debug_mode = p.debug_mode as i32;
        self.buffer_frames = p.buffer_frames as i32;
        self.hardware_buffer_frames = p.hardware_buffer_frames as i32;
        self.displays = p.displays as i32;
        self.ascii_graphs = p.ascii_graphs as i32;
        self.postscript_graphs = p.postscript_graphs as i32;
        self.message_level = p.message_level as i32;
        self.tempo = p.tempo as i32;
        self.ring_bell = p.ring_bell as i32;
        self.use_cscore = p.use_cscore as i32;
        self.terminate_on_midi = p.terminate_on_midi as i32;
        self.heartbeat = p.heartbeat as i32;
        self.defer_gen01_load = p.defer_gen01_load as i32;
        self.midi_key = p.midi_key as i32;
        self.midi_key_cps = p.midi_key_cps as i32;
        self.midi_key_oct = p.midi_key_oct as i32;
        self.midi_key_pch = p.midi_key_pch as i32;
        self.midi_velocity = p.midi_velocity as i32;
        self.midi_velocity_amp = p.midi_velocity_amp as i32;
        self.no_default_paths = p.no_default_paths as i32;
        self.number_of_threads = p.number_of_threads as i32;
        self.syntax_check_only = p.syntax_check_only as i32;
        self.csd_line_counts = p.csd_line_counts as i32;
        self.compute_weights = p.compute_weights as i32;
        self.realtime_mode = p.realtime_mode as i32;
        self.sample_accurate = p.sample_accurate as i32;
        self.sample_rate_override = p.sample_rate_override;
        self.control_rate_override = p.control_rate_override;
        self.nchnls_override = p.nchnls_override as i32;
        self.nchnls_i_override = p.nchnls_i_override as i32;
        self.e0dbfs_override = p.e0dbfs_override;
        self.daemon = p.daemon as i32;
        self.ksmps_override = p.ksmps_override as i32;
        self.fft_library = p.FFT_library as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_fields_survive_the_raw_trip() {
        let mut params = CsoundParams::default();
        params.ring_bell = 1;
        params.message_level = 231;
        params.sample_rate_override = 48_000.0;

        let mut back = CsoundParams::default();
        back.fill_from_raw(&params.to_raw());
        assert_eq!(back, params);
    }
}
