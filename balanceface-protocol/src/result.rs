//! Result codes reported by the host messaging service

/// Outcome of an app-message operation, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMessageResult {
    /// Operation completed
    Ok,
    /// Companion did not acknowledge in time
    SendTimeout,
    /// Companion rejected the message
    SendRejected,
    /// No phone connected
    NotConnected,
    /// Companion app is not running
    AppNotRunning,
    /// Bad arguments to the messaging call
    InvalidArgs,
    /// A send is already in flight
    Busy,
    /// Message larger than the negotiated buffer
    BufferOverflow,
    /// Buffer was already released
    AlreadyReleased,
    /// Callback registered twice
    CallbackAlreadyRegistered,
    /// Callback missing
    CallbackNotRegistered,
    /// Host could not allocate the buffers
    OutOfMemory,
    /// Channel is closed
    Closed,
    /// Host-internal failure
    InternalError,
    /// Operation not valid in the current state
    InvalidState,
}

// Wire values reported by the host
const RESULT_OK: u32 = 0;
const RESULT_SEND_TIMEOUT: u32 = 1 << 1;
const RESULT_SEND_REJECTED: u32 = 1 << 2;
const RESULT_NOT_CONNECTED: u32 = 1 << 3;
const RESULT_APP_NOT_RUNNING: u32 = 1 << 4;
const RESULT_INVALID_ARGS: u32 = 1 << 5;
const RESULT_BUSY: u32 = 1 << 6;
const RESULT_BUFFER_OVERFLOW: u32 = 1 << 7;
const RESULT_ALREADY_RELEASED: u32 = 1 << 9;
const RESULT_CALLBACK_ALREADY_REGISTERED: u32 = 1 << 10;
const RESULT_CALLBACK_NOT_REGISTERED: u32 = 1 << 11;
const RESULT_OUT_OF_MEMORY: u32 = 1 << 12;
const RESULT_CLOSED: u32 = 1 << 13;
const RESULT_INTERNAL_ERROR: u32 = 1 << 14;
const RESULT_INVALID_STATE: u32 = 1 << 15;

impl AppMessageResult {
    /// Parse a result from the host's numeric code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            RESULT_OK => Some(AppMessageResult::Ok),
            RESULT_SEND_TIMEOUT => Some(AppMessageResult::SendTimeout),
            RESULT_SEND_REJECTED => Some(AppMessageResult::SendRejected),
            RESULT_NOT_CONNECTED => Some(AppMessageResult::NotConnected),
            RESULT_APP_NOT_RUNNING => Some(AppMessageResult::AppNotRunning),
            RESULT_INVALID_ARGS => Some(AppMessageResult::InvalidArgs),
            RESULT_BUSY => Some(AppMessageResult::Busy),
            RESULT_BUFFER_OVERFLOW => Some(AppMessageResult::BufferOverflow),
            RESULT_ALREADY_RELEASED => Some(AppMessageResult::AlreadyReleased),
            RESULT_CALLBACK_ALREADY_REGISTERED => {
                Some(AppMessageResult::CallbackAlreadyRegistered)
            }
            RESULT_CALLBACK_NOT_REGISTERED => Some(AppMessageResult::CallbackNotRegistered),
            RESULT_OUT_OF_MEMORY => Some(AppMessageResult::OutOfMemory),
            RESULT_CLOSED => Some(AppMessageResult::Closed),
            RESULT_INTERNAL_ERROR => Some(AppMessageResult::InternalError),
            RESULT_INVALID_STATE => Some(AppMessageResult::InvalidState),
            _ => None,
        }
    }

    /// Convert to the host's numeric code
    pub fn code(self) -> u32 {
        match self {
            AppMessageResult::Ok => RESULT_OK,
            AppMessageResult::SendTimeout => RESULT_SEND_TIMEOUT,
            AppMessageResult::SendRejected => RESULT_SEND_REJECTED,
            AppMessageResult::NotConnected => RESULT_NOT_CONNECTED,
            AppMessageResult::AppNotRunning => RESULT_APP_NOT_RUNNING,
            AppMessageResult::InvalidArgs => RESULT_INVALID_ARGS,
            AppMessageResult::Busy => RESULT_BUSY,
            AppMessageResult::BufferOverflow => RESULT_BUFFER_OVERFLOW,
            AppMessageResult::AlreadyReleased => RESULT_ALREADY_RELEASED,
            AppMessageResult::CallbackAlreadyRegistered => RESULT_CALLBACK_ALREADY_REGISTERED,
            AppMessageResult::CallbackNotRegistered => RESULT_CALLBACK_NOT_REGISTERED,
            AppMessageResult::OutOfMemory => RESULT_OUT_OF_MEMORY,
            AppMessageResult::Closed => RESULT_CLOSED,
            AppMessageResult::InternalError => RESULT_INTERNAL_ERROR,
            AppMessageResult::InvalidState => RESULT_INVALID_STATE,
        }
    }

    /// Short human-readable description
    pub fn description(self) -> &'static str {
        match self {
            AppMessageResult::Ok => "ok",
            AppMessageResult::SendTimeout => "send timeout",
            AppMessageResult::SendRejected => "send rejected",
            AppMessageResult::NotConnected => "not connected",
            AppMessageResult::AppNotRunning => "companion not running",
            AppMessageResult::InvalidArgs => "invalid arguments",
            AppMessageResult::Busy => "busy",
            AppMessageResult::BufferOverflow => "buffer overflow",
            AppMessageResult::AlreadyReleased => "already released",
            AppMessageResult::CallbackAlreadyRegistered => "callback already registered",
            AppMessageResult::CallbackNotRegistered => "callback not registered",
            AppMessageResult::OutOfMemory => "out of memory",
            AppMessageResult::Closed => "closed",
            AppMessageResult::InternalError => "internal error",
            AppMessageResult::InvalidState => "invalid state",
        }
    }

    /// Returns true for the success code
    pub fn is_ok(self) -> bool {
        self == AppMessageResult::Ok
    }
}
