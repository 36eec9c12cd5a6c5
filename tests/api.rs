extern crate csnd;

use csnd::{ControlChannelType, Csound, CsoundParams};

static TEST_CSD: &str = "<CsoundSynthesizer>
<CsOptions>
-n -d
</CsOptions>
<CsInstruments>
sr = 44100
ksmps = 32
nchnls = 2
0dbfs = 1
instr 1
  asig init 0
  outs asig, asig
endin
</CsInstruments>
<CsScore>
i 1 0 0.1
e
</CsScore>
</CsoundSynthesizer>";

#[test]
fn instance_lifecycle() {
    let csound = Csound::new();
    assert!(csound.version() >= 6000);
    assert!(csound.api_version() > 0);
    // Drop destroys the handle; creating another instance afterwards must
    // still work.
    drop(csound);
    let _again = Csound::new();
}

#[test]
fn host_data_round_trip() {
    let csound = Csound::with_host_data(1956u32);
    assert!(csound.has_host_data());
    assert_eq!(csound.host_data(|v: &u32| *v), Some(1956));

    // A read with the wrong type observes nothing, and the payload stays put.
    assert!(csound.host_data(|v: &i64| *v).is_none());
    assert_eq!(csound.host_data(|v: &u32| *v), Some(1956));

    // Last write wins.
    csound.set_host_data(String::from("host state"));
    assert_eq!(
        csound.host_data(|s: &String| s.clone()).as_deref(),
        Some("host state")
    );

    let taken = csound.take_host_data().unwrap();
    assert_eq!(taken.downcast_ref::<String>().map(String::as_str), Some("host state"));
    assert!(!csound.has_host_data());
    assert!(csound.take_host_data().is_none());
}

#[test]
fn host_data_preserves_the_allocation() {
    let csound = Csound::new();
    assert!(!csound.has_host_data());

    let payload: Box<u64> = Box::new(0xC0FFEE);
    let addr = &*payload as *const u64;
    csound.set_host_data_boxed(payload);
    assert_eq!(csound.host_data(|v: &u64| v as *const u64), Some(addr));

    csound.clear_host_data();
    assert!(!csound.has_host_data());
}

#[test]
fn params_read_modify_write() {
    let csound = Csound::new();
    let mut params = CsoundParams::default();
    csound.get_params(&mut params);

    params.ring_bell = 1;
    csound.set_params(&params);

    let mut check = CsoundParams::default();
    csound.get_params(&mut check);
    assert_eq!(check.ring_bell, 1);

    // The debug accessor pair reads the same field as the block.
    csound.set_debug(true);
    assert!(csound.debug());
    csound.get_params(&mut check);
    assert_eq!(check.debug_mode, 1);
    csound.set_debug(false);
    assert!(!csound.debug());
}

#[test]
fn module_enumeration_terminates() {
    let csound = Csound::new();
    let modules: Vec<_> = csound.modules().take(1024).collect();
    assert!(modules.len() < 1024);
    for module in &modules {
        assert!(!module.name.is_empty());
        assert!(module.kind == "audio" || module.kind == "midi");
    }
}

#[test]
fn device_listing_after_compilation() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();

    // With -n there is no realtime module, so the lists may well be empty;
    // the call itself must still produce a well formed snapshot.
    for dev in csound.audio_devices(false) {
        assert!(!dev.is_output);
    }
    for dev in csound.audio_devices(true) {
        assert!(dev.is_output);
    }
    let _ = csound.midi_devices(false);
    let _ = csound.midi_devices(true);
}

#[test]
fn control_channel_access() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();

    let channel = csound
        .get_channel_ptr(
            "motion",
            ControlChannelType::CSOUND_CONTROL_CHANNEL
                | ControlChannelType::CSOUND_INPUT_CHANNEL
                | ControlChannelType::CSOUND_OUTPUT_CHANNEL,
        )
        .unwrap();
    assert_eq!(channel.get_size(), 1);
    assert_eq!(
        channel.channel_type(),
        ControlChannelType::CSOUND_CONTROL_CHANNEL
    );

    channel.write(&[0.25]).unwrap();
    let mut value = [0f64];
    assert_eq!(channel.read(&mut value).unwrap(), 1);
    assert!((value[0] - 0.25).abs() < 1e-12);

    // The value accessors see the same slot.
    csound.set_control_channel("motion", 0.5);
    assert!((csound.get_control_channel("motion").unwrap() - 0.5).abs() < 1e-12);

    let channels = csound.list_channels().unwrap();
    assert!(channels.iter().any(|info| info.name == "motion"));
}

#[test]
fn audio_channel_spans_one_control_period() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();

    let channel = csound
        .get_channel_ptr(
            "wave",
            ControlChannelType::CSOUND_AUDIO_CHANNEL
                | ControlChannelType::CSOUND_OUTPUT_CHANNEL,
        )
        .unwrap();
    assert_eq!(channel.get_size(), csound.ksmps() as usize);
}

#[test]
fn attributes_follow_the_orchestra_header() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();
    assert_eq!(csound.sample_rate(), 44100.0);
    assert_eq!(csound.ksmps(), 32);
    assert_eq!(csound.output_channels(), 2);
    assert_eq!(csound.control_rate(), 44100.0 / 32.0);
}

#[test]
fn named_gens_resolve_by_number() {
    let csound = Csound::new();
    for gen in csound.named_gens() {
        assert!(!gen.name.is_empty());
        assert!(gen.num > 0);
        assert_eq!(csound.is_named_gen(gen.num as u32), gen.name.len());
        assert_eq!(csound.gen_name(gen.num as u32).as_ref(), Some(&gen.name));
    }
    // GEN 10 is a classic numbered routine, never a named one.
    assert_eq!(csound.is_named_gen(10), 0);
    assert!(csound.gen_name(10).is_none());
}

#[test]
fn every_utility_has_a_description() {
    let csound = Csound::new();
    let utilities = csound.list_utilities().unwrap();
    assert!(!utilities.is_empty());
    for name in &utilities {
        assert!(
            csound.utility_description(name).is_some(),
            "no description for utility {}",
            name
        );
    }
    assert!(csound.utility_description("no_such_utility").is_none());
}

#[test]
fn run_command_reports_the_exit_status() {
    assert_eq!(Csound::run_command(&["ls", "-a"], false), Ok(0));
    assert!(Csound::run_command(&["ls"], true).is_ok());
    assert!(Csound::run_command::<&str>(&[], false).is_err());
}

#[test]
fn performance_runs_to_end_of_score() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();
    while !csound.perform_ksmps() {}
    csound.stop();
}

#[test]
fn reset_allows_recompilation() {
    let csound = Csound::new();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();
    csound.reset();
    csound.compile_csd_text(TEST_CSD).unwrap();
    csound.start().unwrap();
}
