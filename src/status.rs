use log::trace;
use std::str::FromStr;

use crate::error::{Error, Result};

pub mod class;
pub use class::StatusClass;


macro_rules! status {
    ($($variant:ident = $code:literal, $konst:ident, $reason:literal;)*) => {
        /// Registered HTTP status codes.
        ///
        /// The discriminant of each variant is its numeric code, so
        /// `StatusCode::NotFound as u16 == 404`.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(into = "u16", try_from = "u16")]
        #[allow(clippy::upper_case_acronyms)]
        #[repr(u16)]
        pub enum StatusCode {
            $($variant = $code,)*
        }

        /// The same table as plain integers.
        pub mod codes {
            $(pub const $konst: u16 = $code;)*
        }

        impl StatusCode {
            /// Every code, in ascending order.
            pub const ALL: &'static [StatusCode] = &[$(Self::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            pub const fn reason(self) -> &'static str {
                match self {
                    $(Self::$variant => $reason,)*
                }
            }

            /// `<code> <reason>`, as found on an HTTP/1 status line.
            pub const fn status_line(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!($code, " ", $reason),)*
                }
            }

            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

status! {
    Continue = 100, CONTINUE, "Continue";
    SwitchingProtocols = 101, SWITCHING_PROTOCOLS, "Switching Protocols";
    Processing = 102, PROCESSING, "Processing";

    OK = 200, OK, "OK";
    Created = 201, CREATED, "Created";
    Accepted = 202, ACCEPTED, "Accepted";
    NonAuthoritativeInfo = 203, NON_AUTHORITATIVE_INFO, "Non-Authoritative Information";
    NoContent = 204, NO_CONTENT, "No Content";
    ResetContent = 205, RESET_CONTENT, "Reset Content";
    PartialContent = 206, PARTIAL_CONTENT, "Partial Content";
    MultiStatus = 207, MULTI_STATUS, "Multi-Status";
    AlreadyReported = 208, ALREADY_REPORTED, "Already Reported";
    IMUsed = 226, IM_USED, "IM Used";

    MultipleChoices = 300, MULTIPLE_CHOICES, "Multiple Choices";
    MovedPermanently = 301, MOVED_PERMANENTLY, "Moved Permanently";
    Found = 302, FOUND, "Found";
    SeeOther = 303, SEE_OTHER, "See Other";
    NotModified = 304, NOT_MODIFIED, "Not Modified";
    UseProxy = 305, USE_PROXY, "Use Proxy";
    // reserved by RFC 7231, no longer used
    Unused = 306, UNUSED, "Unused";
    TemporaryRedirect = 307, TEMPORARY_REDIRECT, "Temporary Redirect";
    PermanentRedirect = 308, PERMANENT_REDIRECT, "Permanent Redirect";

    BadRequest = 400, BAD_REQUEST, "Bad Request";
    Unauthorized = 401, UNAUTHORIZED, "Unauthorized";
    PaymentRequired = 402, PAYMENT_REQUIRED, "Payment Required";
    Forbidden = 403, FORBIDDEN, "Forbidden";
    NotFound = 404, NOT_FOUND, "Not Found";
    MethodNotAllowed = 405, METHOD_NOT_ALLOWED, "Method Not Allowed";
    NotAcceptable = 406, NOT_ACCEPTABLE, "Not Acceptable";
    ProxyAuthRequired = 407, PROXY_AUTH_REQUIRED, "Proxy Authentication Required";
    RequestTimeout = 408, REQUEST_TIMEOUT, "Request Timeout";
    Conflict = 409, CONFLICT, "Conflict";
    Gone = 410, GONE, "Gone";
    LengthRequired = 411, LENGTH_REQUIRED, "Length Required";
    PreconditionFailed = 412, PRECONDITION_FAILED, "Precondition Failed";
    RequestEntityTooLarge = 413, REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large";
    RequestURITooLong = 414, REQUEST_URI_TOO_LONG, "Request URI Too Long";
    UnsupportedMediaType = 415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type";
    RequestedRangeNotSatisfiable = 416, REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable";
    ExpectationFailed = 417, EXPECTATION_FAILED, "Expectation Failed";
    Teapot = 418, TEAPOT, "I'm a teapot";
    UnprocessableEntity = 422, UNPROCESSABLE_ENTITY, "Unprocessable Entity";
    Locked = 423, LOCKED, "Locked";
    FailedDependency = 424, FAILED_DEPENDENCY, "Failed Dependency";
    UpgradeRequired = 426, UPGRADE_REQUIRED, "Upgrade Required";
    PreconditionRequired = 428, PRECONDITION_REQUIRED, "Precondition Required";
    TooManyRequests = 429, TOO_MANY_REQUESTS, "Too Many Requests";
    RequestHeaderFieldsTooLarge = 431, REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large";
    UnavailableForLegalReasons = 451, UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons";

    InternalServerError = 500, INTERNAL_SERVER_ERROR, "Internal Server Error";
    NotImplemented = 501, NOT_IMPLEMENTED, "Not Implemented";
    BadGateway = 502, BAD_GATEWAY, "Bad Gateway";
    ServiceUnavailable = 503, SERVICE_UNAVAILABLE, "Service Unavailable";
    GatewayTimeout = 504, GATEWAY_TIMEOUT, "Gateway Timeout";
    HTTPVersionNotSupported = 505, HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported";
    VariantAlsoNegotiates = 506, VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates";
    InsufficientStorage = 507, INSUFFICIENT_STORAGE, "Insufficient Storage";
    LoopDetected = 508, LOOP_DETECTED, "Loop Detected";
    NotExtended = 510, NOT_EXTENDED, "Not Extended";
    NetworkAuthenticationRequired = 511, NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required";
}

impl StatusCode {
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Exact, case-sensitive match on the symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    pub fn class(self) -> StatusClass {
        match self.as_u16() {
            100..200 => StatusClass::Informational,
            200..300 => StatusClass::Successful,
            300..400 => StatusClass::Redirection,
            400..500 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    pub fn is_informational(self) -> bool {
        self.class() == StatusClass::Informational
    }
    pub fn is_success(self) -> bool {
        self.class() == StatusClass::Successful
    }
    pub fn is_redirection(self) -> bool {
        self.class() == StatusClass::Redirection
    }
    pub fn is_client_error(self) -> bool {
        self.class() == StatusClass::ClientError
    }
    pub fn is_server_error(self) -> bool {
        self.class() == StatusClass::ServerError
    }
    pub fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> u16 {
        status.as_u16()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;
    fn try_from(code: u16) -> Result<Self> {
        if !class::CODE_RANGE.contains(&code) {
            return Err(Error::OutOfRange(code));
        }
        Self::from_u16(code).ok_or(Error::UnknownCode(code))
    }
}

/// Accepts either a decimal code (`"404"`) or a symbolic name compared
/// ASCII case-insensitively (`"notfound"`).
impl FromStr for StatusCode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let code = s.parse::<u16>().map_err(|_| Error::UnknownName(s.into()))?;
            trace!("looking up status code {code}");
            return Self::try_from(code);
        }

        trace!("looking up status name {s:?}");
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownName(s.into()))
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.status_line())
    }
}
