use crate::SupplyError;
use log::{debug, warn};
use model::file_io::FileIoError;
use model::types_and_const::{is_supported_base, Base, Threshold};
use model::{Point, PointSet};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keys {
    /// Number of shares the document claims to hold.
    #[serde(default)]
    pub n: Option<usize>,
    /// Number of shares needed to reconstruct the secret.
    pub k: Threshold,
}

/// A share value written as a string of digits in `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

impl EncodedShare {
    pub fn new(base: Base, value: &str) -> Self {
        EncodedShare {
            base: base.to_string(),
            value: value.to_string(),
        }
    }

    /// Decodes the value of share `id`. An optional leading sign is accepted.
    pub fn decode(&self, id: u64) -> Result<BigInt, SupplyError> {
        let base = self
            .base
            .parse::<Base>()
            .ok()
            .filter(|base| is_supported_base(*base))
            .ok_or_else(|| SupplyError::InvalidBase {
                id,
                base: self.base.clone(),
            })?;

        let invalid = || SupplyError::InvalidValue {
            id,
            base,
            value: self.value.clone(),
        };
        let digits = self
            .value
            .strip_prefix('-')
            .or_else(|| self.value.strip_prefix('+'))
            .unwrap_or(&self.value);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }
        BigInt::parse_bytes(self.value.as_bytes(), base).ok_or_else(invalid)
    }
}

/// Share document: a `keys` header plus one entry per share, keyed by the
/// share's 1-based identifier.
///
/// ```json
/// { "keys": { "n": 4, "k": 3 }, "1": { "base": "10", "value": "4" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl ShareDocument {
    pub fn from_json(text: &str) -> Result<Self, SupplyError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads `path`. Unreadable files are `Io` errors, schema mismatches `Malformed`.
    pub fn load(path: &str) -> Result<Self, SupplyError> {
        let text = fs::read_to_string(path).map_err(|e| FileIoError::ImportError {
            file: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    pub fn threshold(&self) -> Threshold {
        self.keys.k
    }

    /// All shares decoded into points, ordered by identifier. The identifier
    /// is used as the x-coordinate.
    pub fn points(&self) -> Result<PointSet, SupplyError> {
        let mut indexed = Vec::with_capacity(self.shares.len());
        for (key, share) in &self.shares {
            let id = key
                .parse::<u64>()
                .ok()
                .filter(|id| *id > 0)
                .ok_or_else(|| SupplyError::InvalidShareId(key.clone()))?;
            indexed.push((id, share));
        }
        indexed.sort_by_key(|(id, _)| *id);

        if let Some(pair) = indexed.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(SupplyError::DuplicateShareId(pair[0].0));
        }

        let points = indexed
            .into_iter()
            .map(|(id, share)| Ok(Point::new(id, share.decode(id)?)))
            .collect::<Result<Vec<_>, SupplyError>>()?;
        Ok(PointSet::new(points))
    }

    /// The first `k` points, which is exactly what reconstruction consumes.
    pub fn select_points(&self) -> Result<PointSet, SupplyError> {
        let k = self.threshold();
        if k == 0 {
            return Err(SupplyError::ZeroThreshold);
        }
        if let Some(n) = self.keys.n {
            if n != self.shares.len() {
                warn!(
                    "Document declares n = {} but holds {} shares",
                    n,
                    self.shares.len()
                );
            }
        }

        let all = self.points()?;
        let selected = all.first(k).ok_or(SupplyError::NotEnoughShares {
            required: k,
            available: all.len(),
        })?;
        debug!(
            "Selected {} of {} shares: {}",
            k,
            all.len(),
            selected
                .iter()
                .map(|p| p.x().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(PointSet::new(selected.to_vec()))
    }
}
