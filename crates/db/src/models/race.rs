//! Race documents from the `razas` collection.

use bson::serde_helpers::serialize_object_id_as_hex_string;
use cartera_core::types::DocId;
use serde::{Deserialize, Serialize};

use super::decode::null_as_default;

/// A race document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Race {
    #[serde(
        rename(deserialize = "_id", serialize = "id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    pub id: DocId,
    #[serde(rename = "nombre", deserialize_with = "null_as_default", default)]
    pub name: String,
    #[serde(rename = "caracteristicas", deserialize_with = "null_as_default", default)]
    pub traits: Vec<String>,
    #[serde(rename = "unidad_mas_simple", deserialize_with = "null_as_default", default)]
    pub simplest_unit: SimplestUnit,
}

/// The smallest unit a race is made of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplestUnit {
    #[serde(rename = "nombre", deserialize_with = "null_as_default", default)]
    pub name: String,
    #[serde(rename = "funcion", deserialize_with = "null_as_default", default)]
    pub function: String,
}
