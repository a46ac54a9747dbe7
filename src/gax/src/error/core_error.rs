// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client operations.
///
/// The client reports errors from multiple sources. For example, the service
/// may return an error, the transport may be unable to create the necessary
/// connection to make a request, or the request may timeout before a response
/// is received.
///
/// The paginators never create errors of their own: any error returned while
/// fetching a page is returned, unmodified, at the iteration step that needed
/// that page.
///
/// # Example
/// ```
/// use certificatemanager_gax::error::Error;
/// match example_function() {
///     Err(e) if matches!(e.status(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.status().unwrap());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use certificatemanager_gax::error::rpc::{Code, Status};
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use certificatemanager_gax::error::Error;
    /// use certificatemanager_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_headers(status, None)
    }

    /// Creates an error with the information returned by the service,
    /// including any response headers (gRPC metadata).
    pub fn service_with_headers(status: Status, headers: Option<HeaderMap>) -> Self {
        let details = ServiceDetails { status, headers };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use certificatemanager_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// The deadline is configured via
    /// [RequestOptions::set_attempt_timeout][crate::options::RequestOptions::set_attempt_timeout]
    /// and enforced by the stub. The paginators propagate the same options to
    /// every page fetch, so each page gets the same deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a transport problem, such as a dropped
    /// connection.
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(Box::new(TransportDetails {
                headers: Some(headers),
            })),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer, without a service payload.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Creates an error representing a local I/O problem.
    ///
    /// # Example
    /// ```
    /// use certificatemanager_gax::error::Error;
    /// let error = Error::io(std::io::Error::other("cannot create runtime"));
    /// assert!(error.is_io());
    /// ```
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A local I/O problem, detected before the request is sent.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error that does not fit any other category.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use certificatemanager_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// Recurses through the source error chain and returns a reference to
    /// the inner value if it is of type `T`, or `None` if no such inner value
    /// is found.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_deref()? as &(dyn StdError + 'static);
        loop {
            match error.downcast_ref::<T>() {
                Some(e) => return Some(e),
                None => error = error.source()?,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(e) => write!(f, "{} {e}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug, thiserror::Error)]
enum ErrorKind {
    #[error("the request exceeded the request deadline")]
    Timeout,
    #[error("the transport reports an error:")]
    Transport(Box<TransportDetails>),
    #[error("cannot perform the local I/O required by the request:")]
    Io,
    #[error(
        "the service reports an error with code {} described as: {}",
        .0.status.code,
        .0.status.message
    )]
    Service(Box<ServiceDetails>),
    #[error("an unclassified problem making a request:")]
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    headers: Option<HeaderMap>,
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    headers: Option<HeaderMap>,
}
