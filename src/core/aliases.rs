use crate::core::models::RawScheduleBlock;

/// Ordered source field names for one logical attribute of a schedule record.
///
/// Backends disagree on naming (`dia` vs `dia_semana`, `asignatura` vs
/// `nombre_asignatura`...). The first candidate holding a non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub attribute: &'static str,
    pub candidates: &'static [&'static str],
    pub default: Option<&'static str>,
}

pub const DEFAULT_LABEL: &str = "Clase";

pub const DAY: FieldAliases = FieldAliases {
    attribute: "day",
    candidates: &["day", "dia", "dia_semana"],
    default: None,
};

pub const START_TIME: FieldAliases = FieldAliases {
    attribute: "startTime",
    candidates: &["startTime", "hora_inicio", "inicio"],
    default: None,
};

pub const END_TIME: FieldAliases = FieldAliases {
    attribute: "endTime",
    candidates: &["endTime", "hora_fin", "fin"],
    default: None,
};

pub const LABEL: FieldAliases = FieldAliases {
    attribute: "subjectName",
    candidates: &["subjectName", "nombre_asignatura", "asignatura", "nombre"],
    default: Some(DEFAULT_LABEL),
};

pub const INSTRUCTOR: FieldAliases = FieldAliases {
    attribute: "instructorName",
    candidates: &["instructorName", "docente", "nombre_docente", "profesor"],
    default: None,
};

pub const ROOM: FieldAliases = FieldAliases {
    attribute: "room",
    candidates: &["room", "sala", "aula"],
    default: None,
};

pub const CODE: FieldAliases = FieldAliases {
    attribute: "subjectCode",
    candidates: &["subjectCode", "codigo_asignatura", "codigo"],
    default: None,
};

pub const ALL: [FieldAliases; 7] = [DAY, START_TIME, END_TIME, LABEL, INSTRUCTOR, ROOM, CODE];

impl FieldAliases {
    /// Value of the first candidate field that carries text.
    pub fn first_non_empty(&self, raw: &RawScheduleBlock) -> Option<String> {
        self.candidates.iter().find_map(|field| raw.text(field))
    }

    /// Like [`first_non_empty`](Self::first_non_empty), falling back to the default literal.
    pub fn resolve(&self, raw: &RawScheduleBlock) -> Option<String> {
        self.first_non_empty(raw)
            .or_else(|| self.default.map(str::to_string))
    }
}
