use bitflags::bitflags;

/// Native status codes.
///
/// These are expected control flow, not exceptional conditions: enumeration
/// end and generic success/failure travel through the same small set.
/// Positive values are wrapped in `CS_OK` (for example the type of an already
/// existing channel reported by `get_channel_ptr`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Status {
    CS_SIGNAL,
    CS_MEMORY,
    CS_PERFORMANCE,
    CS_INITIALIZATION,
    CS_ERROR,
    CS_SUCCESS,
    CS_OK(i32),
}

impl From<i32> for Status {
    fn from(value: i32) -> Self {
        match value {
            -5 => Status::CS_SIGNAL,
            -4 => Status::CS_MEMORY,
            -3 => Status::CS_PERFORMANCE,
            -2 => Status::CS_INITIALIZATION,
            -1 => Status::CS_ERROR,
            0 => Status::CS_SUCCESS,
            value => Status::CS_OK(value),
        }
    }
}

impl Status {
    pub fn to_i32(self) -> i32 {
        match self {
            Status::CS_SIGNAL => -5,
            Status::CS_MEMORY => -4,
            Status::CS_PERFORMANCE => -3,
            Status::CS_INITIALIZATION => -2,
            Status::CS_ERROR => -1,
            Status::CS_SUCCESS => 0,
            Status::CS_OK(value) => value,
        }
    }
}

bitflags! {
    /// Channel kind tag passed to [`Csound::get_channel_ptr`](crate::Csound::get_channel_ptr).
    ///
    /// Exactly one data-type flag, OR'd with at least one direction flag.
    pub struct ControlChannelType: u32 {
        const CSOUND_UNKNOWN_CHANNEL =     0;

        const CSOUND_CONTROL_CHANNEL =     1;
        const CSOUND_AUDIO_CHANNEL  =      2;
        const CSOUND_STRING_CHANNEL =      3;
        const CSOUND_PVS_CHANNEL =         4;
        const CSOUND_VAR_CHANNEL =         5;

        const CSOUND_CHANNEL_TYPE_MASK =   15;

        const CSOUND_INPUT_CHANNEL =       16;

        const CSOUND_OUTPUT_CHANNEL =      32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_both_directions() {
        assert_eq!(Status::from(0), Status::CS_SUCCESS);
        assert_eq!(Status::from(-1), Status::CS_ERROR);
        assert_eq!(Status::from(3), Status::CS_OK(3));
        assert_eq!(Status::CS_MEMORY.to_i32(), -4);
        assert_eq!(Status::CS_OK(17).to_i32(), 17);
    }
}
