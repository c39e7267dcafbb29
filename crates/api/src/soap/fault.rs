//! SOAP 1.1 faults.

use converto_core::ConversionError;

/// Who is to blame for a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// The request was wrong; resending it unchanged will fail again.
    Client,
    /// The server failed to process a valid request.
    Server,
}

impl FaultCode {
    /// Qualified `faultcode` value.
    #[must_use]
    pub const fn as_qname(self) -> &'static str {
        match self {
            Self::Client => "soap:Client",
            Self::Server => "soap:Server",
        }
    }
}

/// A fault to be returned in place of an operation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Fault code.
    pub code: FaultCode,
    /// Human-readable `faultstring`.
    pub message: String,
}

impl Fault {
    /// Fault caused by the request.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::Client,
            message: message.into(),
        }
    }

    /// Fault caused by the server.
    pub fn server(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::Server,
            message: message.into(),
        }
    }
}

impl From<ConversionError> for Fault {
    fn from(err: ConversionError) -> Self {
        Self::client(err.to_string())
    }
}
