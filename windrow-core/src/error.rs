//! Error types for the Windrow core library.
//!
//! Defines the error enums exposed by the public API, their stable codes, and
//! a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A policy name that is not one of the enumerated allowed values.
///
/// Raised while parsing a [`crate::PolicySet`], before any garden is touched.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigurationError {
    /// Hub selection name was not `NW`, `LM_max`, or `KP_min`.
    #[error("unknown hub selection `{name}`; expected one of NW, LM_max, KP_min")]
    UnknownHubSelection {
        /// The rejected name.
        name: String,
    },
    /// Candidate order name was not `NW`, `LM_max`, or `LM_min`.
    #[error("unknown candidate order `{name}`; expected one of NW, LM_max, LM_min")]
    UnknownCandidateOrder {
        /// The rejected name.
        name: String,
    },
    /// Queue discipline name was not `FIFO` or `LIFO`.
    #[error("unknown queue discipline `{name}`; expected FIFO or LIFO")]
    UnknownQueueDiscipline {
        /// The rejected name.
        name: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigurationError`] variants.
    enum ConfigurationErrorCode for ConfigurationError {
        /// Hub selection name was not recognised.
        UnknownHubSelection => UnknownHubSelection { .. } => "CONFIG_UNKNOWN_HUB_SELECTION",
        /// Candidate order name was not recognised.
        UnknownCandidateOrder => UnknownCandidateOrder { .. } => "CONFIG_UNKNOWN_CANDIDATE_ORDER",
        /// Queue discipline name was not recognised.
        UnknownQueueDiscipline => UnknownQueueDiscipline { .. } => "CONFIG_UNKNOWN_QUEUE_DISCIPLINE",
    }
}

/// Error type produced when configuring or running a [`crate::Planner`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PlanError {
    /// A policy name could not be parsed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// `KP_min` hub selection was requested but the garden has no
    /// distance-to-sink for a workable cell.
    #[error("garden `{garden}` has no distance to the sink for cell {cell}")]
    MissingSinkDistance {
        /// Identifier for the garden lacking the distance.
        garden: Arc<str>,
        /// First workable cell without a distance.
        cell: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PlanError`] variants.
    enum PlanErrorCode for PlanError {
        /// A policy name could not be parsed.
        Configuration => Configuration(..) => "PLAN_CONFIGURATION",
        /// The garden lacks a distance-to-sink required by `KP_min`.
        MissingSinkDistance => MissingSinkDistance { .. } => "PLAN_MISSING_SINK_DISTANCE",
    }
}

impl PlanError {
    /// Retrieve the inner [`ConfigurationErrorCode`] when the error originated
    /// while parsing policy names.
    #[must_use]
    pub const fn configuration_code(&self) -> Option<ConfigurationErrorCode> {
        match self {
            Self::Configuration(error) => Some(error.code()),
            Self::MissingSinkDistance { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PlanError>;
