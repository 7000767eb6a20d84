use std::collections::BTreeMap;

/// A caller-supplied parameter value. The schema names which kind each
/// parameter expects.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => Some(*value as i64),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Describes one adjustable parameter of a fractal family: its default,
/// numeric range, UI step, allowed text options and a human description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub default: ParamValue,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub options: Option<&'static [&'static str]>,
    pub description: &'static str,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn int(default: i64, min: i64, max: i64, step: i64, description: &'static str) -> Self {
        Self {
            default: ParamValue::Int(default),
            min: Some(min as f64),
            max: Some(max as f64),
            step: Some(step as f64),
            options: None,
            description,
        }
    }

    #[must_use]
    pub fn float(default: f64, min: f64, max: f64, step: f64, description: &'static str) -> Self {
        Self {
            default: ParamValue::Float(default),
            min: Some(min),
            max: Some(max),
            step: Some(step),
            options: None,
            description,
        }
    }

    #[must_use]
    pub fn text(
        default: &'static str,
        options: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            default: ParamValue::Text(default.to_string()),
            min: None,
            max: None,
            step: None,
            options: Some(options),
            description,
        }
    }

    /// Pulls an incoming value into this descriptor's valid range. Numeric
    /// values are clamped to [min, max]; a text value outside the options
    /// list falls back to the default.
    #[must_use]
    pub fn clamp(&self, value: ParamValue) -> ParamValue {
        match value {
            ParamValue::Int(v) => {
                let mut v = v as f64;
                if let Some(min) = self.min {
                    v = v.max(min);
                }
                if let Some(max) = self.max {
                    v = v.min(max);
                }
                ParamValue::Int(v as i64)
            }
            ParamValue::Float(v) => {
                let mut v = v;
                if let Some(min) = self.min {
                    v = v.max(min);
                }
                if let Some(max) = self.max {
                    v = v.min(max);
                }
                ParamValue::Float(v)
            }
            ParamValue::Text(v) => match self.options {
                Some(options) if !options.iter().any(|&option| option == v.as_str()) => {
                    self.default.clone()
                }
                _ => ParamValue::Text(v),
            },
        }
    }
}

/// Ordered map of parameter name to descriptor, immutable per family.
pub type ParameterSchema = BTreeMap<&'static str, ParameterDescriptor>;

/// Bag of parameter values a caller passes to `compute`/`render`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ParamValue) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn int_or(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(ParamValue::as_int).unwrap_or(default)
    }

    #[must_use]
    pub fn float_or(&self, name: &str, default: f64) -> f64 {
        self.get(name)
            .and_then(ParamValue::as_float)
            .unwrap_or(default)
    }
}
