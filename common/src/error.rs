//! Error types shared by the map surface, the entities and the widget hosts.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::widget::MarkerId;

#[derive(Debug, Error)]
pub enum MapError {
    /// The display region handed to the map surface does not exist.
    #[error("display region '#{0}' could not be resolved")]
    Initialization(String),

    #[error("invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("malformed coordinate component '{value}'")]
    CoordinateParse {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("expected 'lat,lng', got '{0}'")]
    MalformedCoordinate(String),

    #[error("marker {0} does not exist")]
    UnknownMarker(MarkerId),

    /// Failure inside the mapping library. Passed through untouched.
    #[error(transparent)]
    Widget(#[from] anyhow::Error),
}

pub type MapResult<T> = Result<T, MapError>;
