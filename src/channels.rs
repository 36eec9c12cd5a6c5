//! Named channel table types and the raw channel pointer wrapper.

use std::io;
use std::marker::PhantomData;

use csnd_sys as raw;

use crate::enums::ControlChannelType;
use crate::marshal;

/// Indicates the channel behavior described by its hints.
#[derive(Debug, PartialEq, Clone)]
pub enum ChannelBehavior {
    CHANNEL_NO_HINTS = 0,
    CHANNEL_INT = 1,
    CHANNEL_LIN = 2,
    CHANNEL_EXP = 3,
}

impl ChannelBehavior {
    pub fn from_u32(value: u32) -> ChannelBehavior {
        match value {
            1 => ChannelBehavior::CHANNEL_INT,
            2 => ChannelBehavior::CHANNEL_LIN,
            3 => ChannelBehavior::CHANNEL_EXP,
            _ => ChannelBehavior::CHANNEL_NO_HINTS,
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            ChannelBehavior::CHANNEL_NO_HINTS => 0,
            ChannelBehavior::CHANNEL_INT => 1,
            ChannelBehavior::CHANNEL_LIN => 2,
            ChannelBehavior::CHANNEL_EXP => 3,
        }
    }
}

/// Channel metadata, set through the `chn` opcode on the orchestra side.
#[derive(Debug, Clone)]
pub struct ChannelHints {
    pub behav: ChannelBehavior,
    pub dflt: f64,
    pub min: f64,
    pub max: f64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub attributes: String,
}

impl Default for ChannelHints {
    fn default() -> ChannelHints {
        ChannelHints {
            behav: ChannelBehavior::CHANNEL_NO_HINTS,
            dflt: 0f64,
            min: 0f64,
            max: 0f64,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            attributes: String::default(),
        }
    }
}

/// One entry of the named-channel table snapshot produced by
/// [`Csound::list_channels`](crate::Csound::list_channels).
#[derive(Debug, Clone, Default)]
pub struct ChannelInfo {
    /// The channel name.
    pub name: String,
    /// The bitwise channel kind/direction tag.
    pub type_: i32,
    pub hints: ChannelHints,
}

impl ChannelInfo {
    pub(crate) fn from_raw(info: &raw::controlChannelInfo_t) -> ChannelInfo {
        let hints = &info.hints;
        ChannelInfo {
            name: marshal::ptr_to_string(info.name).unwrap_or_default(),
            type_: info.type_ as i32,
            hints: ChannelHints {
                behav: ChannelBehavior::from_u32(hints.behav as u32),
                dflt: hints.dflt,
                min: hints.min,
                max: hints.max,
                x: hints.x as i32,
                y: hints.y as i32,
                width: hints.width as i32,
                height: hints.height as i32,
                attributes: marshal::ptr_to_string(hints.attributes).unwrap_or_default(),
            },
        }
    }
}

/// Raw pointer into a named channel slot of a running engine.
///
/// The pointer borrows the `Csound` instance that resolved it and cannot
/// outlive it. The backing storage stays owned by the engine; reads and
/// writes are single-threaded-caller territory, as with the rest of the API.
#[derive(Debug)]
pub struct ControlChannelPtr<'a> {
    pub(crate) ptr: *mut f64,
    pub(crate) len: usize,
    pub(crate) channel_type: ControlChannelType,
    pub(crate) phantom: PhantomData<&'a f64>,
}

impl<'a> ControlChannelPtr<'a> {
    /// The channel length in samples: 1 for control channels, ksmps for
    /// audio channels.
    pub fn get_size(&self) -> usize {
        self.len
    }

    pub fn channel_type(&self) -> ControlChannelType {
        self.channel_type
    }

    pub fn read(&self, dest: &mut [f64]) -> Result<usize, io::Error> {
        let len = dest.len().min(self.len);
        if self.len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "the channel has no backing storage",
            ));
        }
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr as *const f64, dest.as_mut_ptr(), len);
        }
        Ok(len)
    }

    pub fn write(&self, src: &[f64]) -> Result<usize, io::Error> {
        let len = src.len().min(self.len);
        if self.len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "the channel has no backing storage",
            ));
        }
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), self.ptr, len);
        }
        Ok(len)
    }
}
