#![allow(bad_style)]
#![allow(dead_code)]
#![allow(improper_ctypes)]

//! Raw declarations for the subset of the libcsound64 C API consumed by the
//! `csnd` crate. Struct layouts are bit-exact with the native headers; any
//! field reordering here breaks the marshaling on the other side.

use std::ptr;

use libc::{c_char, c_double, c_int, c_long, c_uint, c_void};

pub type CSOUND_STATUS = c_int;
pub const CSOUND_SIGNAL: CSOUND_STATUS = -5;
pub const CSOUND_MEMORY: CSOUND_STATUS = -4;
pub const CSOUND_PERFORMANCE: CSOUND_STATUS = -3;
pub const CSOUND_INITIALIZATION: CSOUND_STATUS = -2;
pub const CSOUND_ERROR: CSOUND_STATUS = -1;
pub const CSOUND_SUCCESS: CSOUND_STATUS = 0;

pub type controlChannelType = c_uint;
pub const CSOUND_CONTROL_CHANNEL: controlChannelType = 1;
pub const CSOUND_AUDIO_CHANNEL: controlChannelType = 2;
pub const CSOUND_STRING_CHANNEL: controlChannelType = 3;
pub const CSOUND_PVS_CHANNEL: controlChannelType = 4;
pub const CSOUND_VAR_CHANNEL: controlChannelType = 5;
pub const CSOUND_CHANNEL_TYPE_MASK: controlChannelType = 15;
pub const CSOUND_INPUT_CHANNEL: controlChannelType = 16;
pub const CSOUND_OUTPUT_CHANNEL: controlChannelType = 32;

pub type controlChannelBehavior = c_uint;
pub const CSOUND_CONTROL_CHANNEL_NO_HINTS: controlChannelBehavior = 0;
pub const CSOUND_CONTROL_CHANNEL_INT: controlChannelBehavior = 1;
pub const CSOUND_CONTROL_CHANNEL_LIN: controlChannelBehavior = 2;
pub const CSOUND_CONTROL_CHANNEL_EXP: controlChannelBehavior = 3;

pub const CSOUNDINIT_NO_SIGNAL_HANDLER: u32 = 1;
pub const CSOUNDINIT_NO_ATEXIT: u32 = 2;

/// Opaque engine instance.
pub enum CSOUND {}

#[repr(C)]
#[allow(non_snake_case)]
#[derive(Debug, Copy, Clone)]
pub struct CSOUND_PARAMS {
    pub debug_mode: c_int,
    pub buffer_frames: c_int,
    pub hardware_buffer_frames: c_int,
    pub displays: c_int,
    pub ascii_graphs: c_int,
    pub postscript_graphs: c_int,
    pub message_level: c_int,
    pub tempo: c_int,
    pub ring_bell: c_int,
    pub use_cscore: c_int,
    pub terminate_on_midi: c_int,
    pub heartbeat: c_int,
    pub defer_gen01_load: c_int,
    pub midi_key: c_int,
    pub midi_key_cps: c_int,
    pub midi_key_oct: c_int,
    pub midi_key_pch: c_int,
    pub midi_velocity: c_int,
    pub midi_velocity_amp: c_int,
    pub no_default_paths: c_int,
    pub number_of_threads: c_int,
    pub syntax_check_only: c_int,
    pub csd_line_counts: c_int,
    pub compute_weights: c_int,
    pub realtime_mode: c_int,
    pub sample_accurate: c_int,
    pub sample_rate_override: c_double,
    pub control_rate_override: c_double,
    pub nchnls_override: c_int,
    pub nchnls_i_override: c_int,
    pub e0dbfs_override: c_double,
    pub daemon: c_int,
    pub ksmps_override: c_int,
    pub FFT_library: c_int,
}

impl Default for CSOUND_PARAMS {
    fn default() -> CSOUND_PARAMS {
        unsafe { std::mem::zeroed() }
    }
}

#[repr(C)]
#[allow(non_snake_case)]
#[derive(Copy, Clone)]
pub struct CS_AUDIODEVICE {
    pub device_name: [c_char; 64usize],
    pub device_id: [c_char; 64usize],
    pub rt_module: [c_char; 64usize],
    pub max_nchnls: c_int,
    pub isOutput: c_int,
}

impl Default for CS_AUDIODEVICE {
    fn default() -> CS_AUDIODEVICE {
        CS_AUDIODEVICE {
            device_name: [0; 64usize],
            device_id: [0; 64usize],
            rt_module: [0; 64usize],
            max_nchnls: 0,
            isOutput: 0,
        }
    }
}

#[repr(C)]
#[allow(non_snake_case)]
#[derive(Copy, Clone)]
pub struct CS_MIDIDEVICE {
    pub device_name: [c_char; 64usize],
    pub interface_name: [c_char; 64usize],
    pub device_id: [c_char; 64usize],
    pub midi_module: [c_char; 64usize],
    pub isOutput: c_int,
}

impl Default for CS_MIDIDEVICE {
    fn default() -> CS_MIDIDEVICE {
        CS_MIDIDEVICE {
            device_name: [0; 64usize],
            interface_name: [0; 64usize],
            device_id: [0; 64usize],
            midi_module: [0; 64usize],
            isOutput: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct controlChannelHints_s {
    pub behav: controlChannelBehavior,
    pub dflt: c_double,
    pub min: c_double,
    pub max: c_double,
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
    pub attributes: *mut c_char,
}
pub type controlChannelHints_t = controlChannelHints_s;

impl Default for controlChannelHints_s {
    fn default() -> controlChannelHints_s {
        controlChannelHints_s {
            behav: CSOUND_CONTROL_CHANNEL_NO_HINTS,
            dflt: 0.0,
            min: 0.0,
            max: 0.0,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            attributes: ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct controlChannelInfo_s {
    pub name: *mut c_char,
    pub type_: c_int,
    pub hints: controlChannelHints_t,
}
pub type controlChannelInfo_t = controlChannelInfo_s;

impl Default for controlChannelInfo_s {
    fn default() -> controlChannelInfo_s {
        controlChannelInfo_s {
            name: ptr::null_mut(),
            type_: 0,
            hints: controlChannelHints_t::default(),
        }
    }
}

/// Mersenne Twister state. Caller-allocated: `csoundSeedRandMT` fills a
/// struct the host provides and the library keeps no reference to it.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct CsoundRandMTState_ {
    pub mti: c_int,
    pub mt: [u32; 624usize],
}
pub type CsoundRandMTState = CsoundRandMTState_;

impl Default for CsoundRandMTState_ {
    fn default() -> CsoundRandMTState_ {
        CsoundRandMTState_ {
            mti: 0,
            mt: [0u32; 624usize],
        }
    }
}

/// Node of the named GEN routine list returned by `csoundGetNamedGens`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NAMEDGEN {
    pub name: *mut c_char,
    pub genum: c_int,
    pub next: *mut NAMEDGEN,
}

extern "C" {
    /* Instantiation ************************************************************/

    pub fn csoundInitialize(flags: c_int) -> c_int;

    pub fn csoundCreate(hostData: *mut c_void) -> *mut CSOUND;

    pub fn csoundDestroy(csound: *mut CSOUND);

    pub fn csoundGetVersion() -> c_int;

    pub fn csoundGetAPIVersion() -> c_int;

    /* Host data ***************************************************************/

    pub fn csoundGetHostData(csound: *mut CSOUND) -> *mut c_void;

    pub fn csoundSetHostData(csound: *mut CSOUND, hostData: *mut c_void);

    /* Parameters and options **************************************************/

    pub fn csoundSetOption(csound: *mut CSOUND, option: *const c_char) -> c_int;

    pub fn csoundGetParams(csound: *mut CSOUND, p: *mut CSOUND_PARAMS);

    pub fn csoundSetParams(csound: *mut CSOUND, p: *mut CSOUND_PARAMS);

    pub fn csoundGetDebug(csound: *mut CSOUND) -> c_int;

    pub fn csoundSetDebug(csound: *mut CSOUND, debug: c_int);

    pub fn csoundGetMessageLevel(csound: *mut CSOUND) -> c_int;

    pub fn csoundSetMessageLevel(csound: *mut CSOUND, messageLevel: c_int);

    /* Compilation and performance *********************************************/

    pub fn csoundCompile(csound: *mut CSOUND, argc: c_int, argv: *const *const c_char) -> c_int;

    pub fn csoundCompileCsd(csound: *mut CSOUND, csd: *const c_char) -> c_int;

    pub fn csoundCompileCsdText(csound: *mut CSOUND, csd_text: *const c_char) -> c_int;

    pub fn csoundCompileOrc(csound: *mut CSOUND, orc: *const c_char) -> c_int;

    pub fn csoundReadScore(csound: *mut CSOUND, score: *const c_char) -> c_int;

    pub fn csoundStart(csound: *mut CSOUND) -> c_int;

    pub fn csoundPerform(csound: *mut CSOUND) -> c_int;

    pub fn csoundPerformKsmps(csound: *mut CSOUND) -> c_int;

    pub fn csoundStop(csound: *mut CSOUND);

    pub fn csoundCleanup(csound: *mut CSOUND) -> c_int;

    pub fn csoundReset(csound: *mut CSOUND);

    /* Attributes **************************************************************/

    pub fn csoundGetSr(csound: *mut CSOUND) -> c_double;

    pub fn csoundGetKr(csound: *mut CSOUND) -> c_double;

    pub fn csoundGetKsmps(csound: *mut CSOUND) -> u32;

    pub fn csoundGetNchnls(csound: *mut CSOUND) -> u32;

    pub fn csoundGetNchnlsInput(csound: *mut CSOUND) -> u32;

    /* Module and device enumeration *******************************************/

    pub fn csoundGetModule(
        csound: *mut CSOUND,
        number: c_int,
        name: *mut *mut c_char,
        type_: *mut *mut c_char,
    ) -> c_int;

    pub fn csoundGetAudioDevList(
        csound: *mut CSOUND,
        list: *mut CS_AUDIODEVICE,
        isOutput: c_int,
    ) -> c_int;

    pub fn csoundGetMIDIDevList(
        csound: *mut CSOUND,
        list: *mut CS_MIDIDEVICE,
        isOutput: c_int,
    ) -> c_int;

    /* Channels ****************************************************************/

    pub fn csoundGetChannelPtr(
        csound: *mut CSOUND,
        p: *mut *mut c_double,
        name: *const c_char,
        type_: c_int,
    ) -> c_int;

    pub fn csoundListChannels(csound: *mut CSOUND, lst: *mut *mut controlChannelInfo_t) -> c_int;

    pub fn csoundDeleteChannelList(csound: *mut CSOUND, lst: *mut controlChannelInfo_t);

    pub fn csoundGetControlChannel(
        csound: *mut CSOUND,
        name: *const c_char,
        err: *mut c_int,
    ) -> c_double;

    pub fn csoundSetControlChannel(csound: *mut CSOUND, name: *const c_char, val: c_double);

    /* Named GEN routines ******************************************************/

    pub fn csoundIsNamedGEN(csound: *mut CSOUND, num: c_int) -> c_int;

    pub fn csoundGetNamedGEN(csound: *mut CSOUND, num: c_int, name: *mut c_char, len: c_int);

    pub fn csoundGetNamedGens(csound: *mut CSOUND) -> *mut NAMEDGEN;

    /* Utilities ***************************************************************/

    pub fn csoundListUtilities(csound: *mut CSOUND) -> *mut *mut c_char;

    pub fn csoundDeleteUtilityList(csound: *mut CSOUND, lst: *mut *mut c_char);

    pub fn csoundGetUtilityDescription(csound: *mut CSOUND, utilName: *const c_char)
        -> *const c_char;

    /* Miscellaneous ***********************************************************/

    pub fn csoundRunCommand(argv: *const *const c_char, noWait: c_int) -> c_long;

    pub fn csoundRand31(seedVal: *mut c_int) -> c_int;

    pub fn csoundSeedRandMT(p: *mut CsoundRandMTState, initKey: *const u32, keyLength: u32);

    pub fn csoundRandMT(p: *mut CsoundRandMTState) -> u32;
}
