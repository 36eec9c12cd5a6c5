//! Module and device descriptors plus their enumeration plumbing.

use std::fmt;
use std::ptr;

use csnd_sys as raw;
use libc::c_int;

use crate::engine::Csound;
use crate::marshal;

/// A pluggable engine subsystem (audio or MIDI driver) reported by the
/// module enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// The module name, for example `alsa` or `portaudio`.
    pub name: String,
    /// What the module drives, `audio` or `midi`.
    pub kind: String,
}

/// Descriptor for a realtime audio device, engine-populated during
/// enumeration. Read-only: it has no lifecycle beyond the call that
/// produced it.
#[derive(Clone, Default)]
pub struct AudioDevice {
    pub device_name: Option<String>,
    pub device_id: Option<String>,
    pub rt_module: Option<String>,
    pub max_nchnls: u32,
    pub is_output: bool,
}

/// Descriptor for a realtime MIDI device.
#[derive(Clone, Default)]
pub struct MidiDevice {
    pub device_name: Option<String>,
    pub interface_name: Option<String>,
    pub device_id: Option<String>,
    pub midi_module: Option<String>,
    pub is_output: bool,
}

impl fmt::Debug for AudioDevice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AudioDevice")
            .field("device_name", &self.device_name)
            .field("device_id", &self.device_id)
            .field("rt_module", &self.rt_module)
            .field("max_nchnls", &self.max_nchnls)
            .field("is_output", &self.is_output)
            .finish()
    }
}

impl fmt::Debug for MidiDevice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MidiDevice")
            .field("device_name", &self.device_name)
            .field("interface_name", &self.interface_name)
            .field("device_id", &self.device_id)
            .field("midi_module", &self.midi_module)
            .field("is_output", &self.is_output)
            .finish()
    }
}

impl AudioDevice {
    pub(crate) fn from_raw(dev: &raw::CS_AUDIODEVICE, is_output: bool) -> AudioDevice {
        AudioDevice {
            device_name: marshal::ptr_to_string(dev.device_name.as_ptr()),
            device_id: marshal::ptr_to_string(dev.device_id.as_ptr()),
            rt_module: marshal::ptr_to_string(dev.rt_module.as_ptr()),
            max_nchnls: dev.max_nchnls as u32,
            is_output,
        }
    }
}

impl MidiDevice {
    pub(crate) fn from_raw(dev: &raw::CS_MIDIDEVICE, is_output: bool) -> MidiDevice {
        MidiDevice {
            device_name: marshal::ptr_to_string(dev.device_name.as_ptr()),
            interface_name: marshal::ptr_to_string(dev.interface_name.as_ptr()),
            device_id: marshal::ptr_to_string(dev.device_id.as_ptr()),
            midi_module: marshal::ptr_to_string(dev.midi_module.as_ptr()),
            is_output,
        }
    }
}

/// Iterator over the engine's loaded modules.
///
/// Wraps the native indexed enumeration: each step asks for the next index
/// and stops when the engine signals the end of the sequence, so callers see
/// ordinary finite iteration instead of the index/sentinel loop.
pub struct Modules<'a> {
    csound: &'a Csound,
    index: c_int,
}

impl<'a> Modules<'a> {
    pub(crate) fn new(csound: &'a Csound) -> Modules<'a> {
        Modules { csound, index: 0 }
    }
}

impl<'a> Iterator for Modules<'a> {
    type Item = Module;

    fn next(&mut self) -> Option<Module> {
        let mut name = ptr::null_mut();
        let mut kind = ptr::null_mut();
        unsafe {
            if raw::csoundGetModule(self.csound.as_raw(), self.index, &mut name, &mut kind)
                != raw::CSOUND_SUCCESS
            {
                return None;
            }
        }
        self.index += 1;
        Some(Module {
            name: marshal::ptr_to_string(name).unwrap_or_default(),
            kind: marshal::ptr_to_string(kind).unwrap_or_default(),
        })
    }
}
