//! Editable form model built from an entity.
//!
//! # Responsibility
//! - Project an entity (or new-entity defaults) into named form controls.
//! - Read an entity back out of the raw control values.
//!
//! # Invariants
//! - Controls are keyed by wire field name.
//! - The `id` control is always disabled; edits go through other controls.
//! - Date-time controls hold `YYYY-MM-DDTHH:MM` (UTC) while editing.

use crate::model::entity::EntityResource;
use crate::model::wire_date::{format_date_time, parse_date_time, WireDateError};
use chrono::{DateTime, DurationRound, NaiveDateTime, TimeDelta, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Raw editing pattern for date-time controls.
pub const DATE_TIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ID_FIELD: &str = "id";

/// Form metadata declared per entity.
pub trait FormEntity: EntityResource + Default {
    /// Wire names of date-time fields edited as `YYYY-MM-DDTHH:MM`.
    const DATE_TIME_FIELDS: &'static [&'static str];
    /// Wire names of fields that must hold a value to submit.
    const REQUIRED_FIELDS: &'static [&'static str];
}

#[derive(Debug)]
pub enum FormError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    /// The entity did not serialize to a JSON object.
    NotAnObject,
    UnknownControl(String),
    DisabledControl(String),
    InvalidDateTime { field: String, value: String },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "cannot build form from entity: {err}"),
            Self::Decode(err) => write!(f, "form values do not form a valid entity: {err}"),
            Self::NotAnObject => write!(f, "entity does not serialize to an object"),
            Self::UnknownControl(name) => write!(f, "unknown form control `{name}`"),
            Self::DisabledControl(name) => write!(f, "form control `{name}` is disabled"),
            Self::InvalidDateTime { field, value } => {
                write!(f, "invalid date-time `{value}` in `{field}`")
            }
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    pub value: Value,
    pub required: bool,
    pub disabled: bool,
}

impl FormControl {
    fn is_blank(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

/// Form state for entity `T`.
#[derive(Debug, Clone)]
pub struct EntityForm<T> {
    controls: BTreeMap<String, FormControl>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: FormEntity> EntityForm<T> {
    /// Builds a form for `entity`, or for a new entity when `None`.
    pub fn new(entity: Option<&T>) -> Result<Self, FormError> {
        Self::new_at(entity, Utc::now())
    }

    /// Same as [`EntityForm::new`] with an explicit clock for defaults.
    pub fn new_at(entity: Option<&T>, now: DateTime<Utc>) -> Result<Self, FormError> {
        let mut form = Self {
            controls: BTreeMap::new(),
            _phantom: PhantomData,
        };
        form.reset_at(entity, now)?;
        Ok(form)
    }

    pub fn reset(&mut self, entity: Option<&T>) -> Result<(), FormError> {
        self.reset_at(entity, Utc::now())
    }

    /// Rebuilds every control from `entity` or new-entity defaults.
    pub fn reset_at(&mut self, entity: Option<&T>, now: DateTime<Utc>) -> Result<(), FormError> {
        let raw = match entity {
            Some(entity) => to_raw(entity)?,
            None => new_raw::<T>(now)?,
        };
        self.controls = raw
            .into_iter()
            .map(|(name, value)| {
                let control = FormControl {
                    value,
                    required: T::REQUIRED_FIELDS.contains(&name.as_str()),
                    disabled: name == ID_FIELD,
                };
                (name, control)
            })
            .collect();
        Ok(())
    }

    pub fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.get(name)
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &FormControl)> {
        self.controls
            .iter()
            .map(|(name, control)| (name.as_str(), control))
    }

    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        let control = self
            .controls
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownControl(name.to_string()))?;
        if control.disabled {
            return Err(FormError::DisabledControl(name.to_string()));
        }
        control.value = value;
        Ok(())
    }

    /// All control values, disabled ones included.
    pub fn raw_value(&self) -> Map<String, Value> {
        self.controls
            .iter()
            .map(|(name, control)| (name.clone(), control.value.clone()))
            .collect()
    }

    /// Names of required controls without a value, in name order.
    pub fn missing_required(&self) -> Vec<&str> {
        self.controls
            .iter()
            .filter(|(_, control)| control.required && control.is_blank())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Reads the entity out of the raw form values.
    pub fn get_entity(&self) -> Result<T, FormError> {
        let mut raw = self.raw_value();
        for field in T::DATE_TIME_FIELDS {
            if let Some(value) = raw.get_mut(*field) {
                *value = raw_date_time_to_wire(field, value)?;
            }
        }
        serde_json::from_value(Value::Object(raw)).map_err(FormError::Decode)
    }
}

fn to_raw<T: FormEntity>(entity: &T) -> Result<Map<String, Value>, FormError> {
    let Value::Object(mut raw) = serde_json::to_value(entity).map_err(FormError::Encode)? else {
        return Err(FormError::NotAnObject);
    };
    for field in T::DATE_TIME_FIELDS {
        if let Some(value) = raw.get_mut(*field) {
            *value = wire_date_time_to_raw(field, value)?;
        }
    }
    Ok(raw)
}

fn new_raw<T: FormEntity>(now: DateTime<Utc>) -> Result<Map<String, Value>, FormError> {
    let mut raw = to_raw(&T::default())?;

    let current_minute = now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now);
    let stamp = current_minute.format(DATE_TIME_INPUT_FORMAT).to_string();
    for field in T::DATE_TIME_FIELDS {
        raw.insert((*field).to_string(), Value::String(stamp.clone()));
    }
    Ok(raw)
}

fn wire_date_time_to_raw(field: &str, value: &Value) -> Result<Value, FormError> {
    let Value::String(text) = value else {
        return Ok(Value::Null);
    };
    let parsed = parse_date_time(text).map_err(|err| invalid_date_time(field, err))?;
    Ok(parsed
        .map(|instant| Value::String(instant.format(DATE_TIME_INPUT_FORMAT).to_string()))
        .unwrap_or(Value::Null))
}

fn raw_date_time_to_wire(field: &str, value: &Value) -> Result<Value, FormError> {
    let Value::String(text) = value else {
        return Ok(Value::Null);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_INPUT_FORMAT).map_err(|_| {
        FormError::InvalidDateTime {
            field: field.to_string(),
            value: trimmed.to_string(),
        }
    })?;
    Ok(Value::String(format_date_time(&naive.and_utc())))
}

fn invalid_date_time(field: &str, err: WireDateError) -> FormError {
    let value = match err {
        WireDateError::InvalidDate(value) | WireDateError::InvalidDateTime(value) => value,
    };
    FormError::InvalidDateTime {
        field: field.to_string(),
        value,
    }
}
