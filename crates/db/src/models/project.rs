//! Research project documents from the `PROYECTOS` collection.
//!
//! Fields are read from the stored document keys and written to JSON under
//! the capitalised field names existing clients expect (`ID`, `Nombre`,
//! `FechaPostulacion`, ...). A stored `null` decodes like an absent field.

use bson::serde_helpers::serialize_object_id_as_hex_string;
use cartera_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};

use super::decode::{date_or_zero, lenient_i64, null_as_default, zero_time};

/// A project document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    #[serde(
        rename(deserialize = "_id", serialize = "ID"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    pub id: DocId,
    #[serde(
        rename(deserialize = "nombre", serialize = "Nombre"),
        deserialize_with = "null_as_default",
        default
    )]
    pub name: String,
    #[serde(
        rename(deserialize = "academicos", serialize = "Academicos"),
        deserialize_with = "null_as_default",
        default
    )]
    pub academics: Vec<Academic>,
    #[serde(
        rename(deserialize = "estudiantes", serialize = "Estudiantes"),
        deserialize_with = "null_as_default",
        default
    )]
    pub students: Vec<StudentEntry>,
    /// Stored as int32, int64 or a whole-valued double.
    #[serde(
        rename(deserialize = "monto", serialize = "Monto"),
        deserialize_with = "lenient_i64",
        default
    )]
    pub amount: i64,
    /// `0001-01-01T00:00:00Z` when absent or null.
    #[serde(
        rename(deserialize = "fecha_postulacion", serialize = "FechaPostulacion"),
        deserialize_with = "date_or_zero",
        default = "zero_time"
    )]
    pub application_date: Timestamp,
    #[serde(
        rename(deserialize = "unidad", serialize = "Unidad"),
        deserialize_with = "null_as_default",
        default
    )]
    pub unit: String,
    #[serde(
        rename(deserialize = "tematica", serialize = "Tematica"),
        deserialize_with = "null_as_default",
        default
    )]
    pub theme: String,
    #[serde(
        rename(deserialize = "estatus", serialize = "Estatus"),
        deserialize_with = "null_as_default",
        default
    )]
    pub status: String,
    #[serde(
        rename(deserialize = "convocatoria", serialize = "Convocatoria"),
        deserialize_with = "null_as_default",
        default
    )]
    pub call_name: String,
    #[serde(
        rename(deserialize = "tipo_convocatoria", serialize = "TipoConvocatoria"),
        deserialize_with = "null_as_default",
        default
    )]
    pub call_type: String,
    #[serde(
        rename(deserialize = "inst_conv", serialize = "InstConv"),
        deserialize_with = "null_as_default",
        default
    )]
    pub funding_institution: String,
    #[serde(
        rename(deserialize = "detalle_apoyo", serialize = "DetalleApoyo"),
        deserialize_with = "null_as_default",
        default
    )]
    pub support_detail: String,
    #[serde(
        rename(deserialize = "apoyo", serialize = "Apoyo"),
        deserialize_with = "null_as_default",
        default
    )]
    pub support: String,
    /// External identifier. `None` (absent or null) is distinct from `""`.
    #[serde(rename(deserialize = "id_kth", serialize = "IDKTH"), default)]
    pub kth_id: Option<String>,
    #[serde(
        rename(deserialize = "comentarios", serialize = "Comentarios"),
        deserialize_with = "null_as_default",
        default
    )]
    pub comments: String,
}

/// An academic listed on a project. Embedded, no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Academic {
    #[serde(
        rename(deserialize = "nombre", serialize = "Nombre"),
        deserialize_with = "null_as_default",
        default
    )]
    pub first_name: String,
    #[serde(
        rename(deserialize = "a_paterno", serialize = "APaterno"),
        deserialize_with = "null_as_default",
        default
    )]
    pub paternal_surname: String,
    #[serde(
        rename(deserialize = "a_materno", serialize = "AMaterno"),
        deserialize_with = "null_as_default",
        default
    )]
    pub maternal_surname: String,
}

/// One entry of a project's student list.
///
/// Every stored document observed so far has an empty list, so the entry
/// shape is unknown; values are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StudentEntry(pub serde_json::Value);
