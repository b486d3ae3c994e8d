//! Batch input types handed over by the evaluation harness.
//!
//! Predictions arrive already decoded to strings. Ground truth arrives either
//! as plain strings or as fixed-width padded strings with their true lengths.
//! Anything framework-specific (tensors, device buffers) is converted to these
//! plain types by the caller.

use crate::core::errors::{EvalError, EvalResult};
use crate::core::validation::validate_length_match;
use serde_json::Value;

/// One batch of decoded predictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecPredictions {
    /// Predicted text per sample.
    pub texts: Vec<String>,
    /// Optional confidence per sample. Carried for diagnostics only; scoring
    /// never reads it.
    pub confs: Option<Vec<f32>>,
}

impl RecPredictions {
    /// Creates predictions without confidences.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            confs: None,
        }
    }

    /// Attaches per-sample confidences.
    pub fn with_confs(mut self, confs: Vec<f32>) -> Self {
        self.confs = Some(confs);
        self
    }

    /// Number of predicted samples.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns true if the batch has no predictions.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Parses predictions from a loosely-typed value.
    ///
    /// Accepts `{"texts": [...], "confs": [...]}` (with `confs` optional) or
    /// a bare array of strings.
    pub fn from_json(value: &Value) -> EvalResult<Self> {
        match value {
            Value::Array(_) => Ok(Self {
                texts: string_array(value, "predictions")?,
                confs: None,
            }),
            Value::Object(map) => {
                let texts = map.get("texts").ok_or_else(|| {
                    EvalError::invalid_argument("predictions object is missing 'texts'")
                })?;
                let confs = match map.get("confs") {
                    None | Some(Value::Null) => None,
                    Some(confs) => Some(float_array(confs, "confs")?),
                };
                Ok(Self {
                    texts: string_array(texts, "predictions.texts")?,
                    confs,
                })
            }
            other => Err(EvalError::invalid_argument(format!(
                "predictions must be an object with 'texts' or a list of strings, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Ground truth for one batch.
#[derive(Debug, Clone, PartialEq)]
pub enum GroundTruth {
    /// Plain label per sample.
    Texts(Vec<String>),
    /// Fixed-width labels; sample `i` keeps the first `lengths[i]` characters
    /// of `texts[i]`.
    Padded {
        texts: Vec<String>,
        lengths: Vec<usize>,
    },
}

impl GroundTruth {
    /// Creates plain ground truth.
    pub fn texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Texts(texts.into_iter().map(Into::into).collect())
    }

    /// Creates padded ground truth with the true length of every label.
    pub fn padded<I, S>(texts: I, lengths: Vec<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Padded {
            texts: texts.into_iter().map(Into::into).collect(),
            lengths,
        }
    }

    /// Number of labels in the batch.
    pub fn len(&self) -> usize {
        match self {
            Self::Texts(texts) | Self::Padded { texts, .. } => texts.len(),
        }
    }

    /// Returns true if the batch has no labels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the effective label of every sample, with padding removed.
    ///
    /// A length larger than its label keeps the whole label.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if `texts` and `lengths` differ in size.
    pub fn unpack(&self) -> EvalResult<Vec<&str>> {
        match self {
            Self::Texts(texts) => Ok(texts.iter().map(String::as_str).collect()),
            Self::Padded { texts, lengths } => {
                validate_length_match(texts.len(), lengths.len(), "gt_texts", "gt_lens")?;
                Ok(texts
                    .iter()
                    .zip(lengths)
                    .map(|(text, &len)| truncate_chars(text, len))
                    .collect())
            }
        }
    }

    /// Parses ground truth from a loosely-typed value.
    ///
    /// Accepts an array of strings, or a two-element array `[texts, lengths]`
    /// where `texts` is an array of strings and `lengths` an array of
    /// non-negative integers.
    pub fn from_json(value: &Value) -> EvalResult<Self> {
        let items = value.as_array().ok_or_else(|| {
            EvalError::invalid_argument(format!(
                "ground truth must be a list, got {}",
                json_kind(value)
            ))
        })?;

        if items.iter().all(Value::is_string) {
            return Ok(Self::Texts(string_array(value, "ground truth")?));
        }

        match items.as_slice() {
            [texts @ Value::Array(_), lengths @ Value::Array(_)] => Ok(Self::Padded {
                texts: string_array(texts, "gt_texts")?,
                lengths: length_array(lengths)?,
            }),
            _ => Err(EvalError::invalid_argument(format!(
                "ground truth must be a list of strings or a [gt_texts, gt_lens] pair, got a list of {} items",
                items.len()
            ))),
        }
    }
}

/// One (prediction, label) pair after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub prediction: String,
    pub ground_truth: String,
}

/// Returns the prefix of `text` holding its first `len` characters.
fn truncate_chars(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn string_array(value: &Value, name: &str) -> EvalResult<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        EvalError::invalid_argument(format!("'{}' must be a list, got {}", name, json_kind(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                EvalError::invalid_argument(format!(
                    "'{}'[{}] must be a string, got {}",
                    name,
                    idx,
                    json_kind(item)
                ))
            })
        })
        .collect()
}

fn float_array(value: &Value, name: &str) -> EvalResult<Vec<f32>> {
    let items = value.as_array().ok_or_else(|| {
        EvalError::invalid_argument(format!("'{}' must be a list, got {}", name, json_kind(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_f64().map(|v| v as f32).ok_or_else(|| {
                EvalError::invalid_argument(format!(
                    "'{}'[{}] must be a number, got {}",
                    name,
                    idx,
                    json_kind(item)
                ))
            })
        })
        .collect()
}

fn length_array(value: &Value) -> EvalResult<Vec<usize>> {
    let items = value.as_array().ok_or_else(|| {
        EvalError::invalid_argument(format!("'gt_lens' must be a list, got {}", json_kind(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_u64()
                .and_then(|len| usize::try_from(len).ok())
                .ok_or_else(|| {
                    EvalError::invalid_argument(format!(
                        "'gt_lens'[{}] must be a non-negative integer, got {}",
                        idx, item
                    ))
                })
        })
        .collect()
}
