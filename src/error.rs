//! Error types for the sky visualizer.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad failure categories.
///
/// Every kind is fatal: the visualizer has no degraded mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The ephemeris could not answer for the given location or instant.
    Ephemeris,
    /// The window or display could not be used.
    RenderSurface,
    /// Startup settings were rejected.
    Configuration,
}

/// Errors that can occur while setting up or running a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Date/time could not be represented or resolved.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Observer location rejected at startup.
    InvalidLocation {
        /// Requested latitude.
        latitude: f64,
        /// Requested longitude.
        longitude: f64,
    },
    /// Unknown IANA time zone name.
    InvalidTimeZone {
        /// The rejected name.
        name: String,
    },
    /// Start wall time that does not exist in the chosen zone.
    InvalidStartTime {
        /// Description of the problem.
        message: &'static str,
    },
    /// Step mode index outside the mode table.
    InvalidStepMode {
        /// The rejected index.
        index: usize,
    },
    /// Numerical computation error (e.g. non-finite angle).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
    /// Window or display failure.
    RenderSurface {
        /// Description reported by the windowing layer.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidLocation {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "invalid observer location ({latitude}°, {longitude}°)"
                )
            }
            Self::InvalidTimeZone { name } => write!(f, "unknown time zone {name:?}"),
            Self::InvalidStartTime { message } => write!(f, "invalid start time: {message}"),
            Self::InvalidStepMode { index } => {
                write!(f, "invalid step mode {index}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
            Self::RenderSurface { message } => {
                write!(f, "render surface unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid observer location error.
    #[must_use]
    pub const fn invalid_location(latitude: f64, longitude: f64) -> Self {
        Self::InvalidLocation {
            latitude,
            longitude,
        }
    }

    /// Creates an unknown time zone error.
    #[must_use]
    pub fn invalid_time_zone(name: impl Into<String>) -> Self {
        Self::InvalidTimeZone { name: name.into() }
    }

    /// Creates an invalid start time error.
    #[must_use]
    pub const fn invalid_start_time(message: &'static str) -> Self {
        Self::InvalidStartTime { message }
    }

    /// Creates an invalid step mode error.
    #[must_use]
    pub const fn invalid_step_mode(index: usize) -> Self {
        Self::InvalidStepMode { index }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Creates a render surface error.
    #[must_use]
    pub fn render_surface(message: impl Into<String>) -> Self {
        Self::RenderSurface {
            message: message.into(),
        }
    }

    /// Groups the error into one of the fatal failure kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLatitude { .. }
            | Self::InvalidLongitude { .. }
            | Self::InvalidDateTime { .. }
            | Self::ComputationError { .. } => ErrorKind::Ephemeris,
            Self::RenderSurface { .. } => ErrorKind::RenderSurface,
            Self::InvalidLocation { .. }
            | Self::InvalidTimeZone { .. }
            | Self::InvalidStartTime { .. }
            | Self::InvalidStepMode { .. } => ErrorKind::Configuration,
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Rejects non-finite angles coming out of the ephemeris.
///
/// # Errors
/// Returns `ComputationError` if the angle is NaN or infinite.
pub fn check_finite_angle(angle: f64, message: &'static str) -> Result<f64> {
    if !angle.is_finite() {
        return Err(Error::computation_error(message));
    }
    Ok(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(43.833333).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-110.700833).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_step_mode(9);
        assert_eq!(err.to_string(), "invalid step mode 9");

        let err = Error::invalid_time_zone("Mars/Olympus");
        assert_eq!(err.to_string(), "unknown time zone \"Mars/Olympus\"");

        let err = Error::render_surface("no display");
        assert_eq!(err.to_string(), "render surface unavailable: no display");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::invalid_longitude(200.0).kind(), ErrorKind::Ephemeris);
        assert_eq!(
            Error::computation_error("azimuth is not finite").kind(),
            ErrorKind::Ephemeris
        );
        assert_eq!(
            Error::render_surface("window").kind(),
            ErrorKind::RenderSurface
        );
        assert_eq!(
            Error::invalid_step_mode(6).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::invalid_location(91.0, 0.0).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::invalid_time_zone("Mars/Olympus").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::invalid_start_time("skipped by DST").kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_check_finite_angle() {
        assert_eq!(check_finite_angle(1.25, "x").unwrap(), 1.25);
        assert!(check_finite_angle(f64::NAN, "x").is_err());
        assert!(check_finite_angle(f64::INFINITY, "x").is_err());
    }
}
