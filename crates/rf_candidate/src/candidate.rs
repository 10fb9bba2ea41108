use std::fmt;
use serde::{Serialize, Deserialize};

use crate::CandidateError;

/// Free energy derived from a partition function (kcal/mol).
pub type PfEnergy = f64;

/// The outcome of a single restricted folding experiment.
///
/// A sequence is folded while a structural restriction is enforced
/// (`restriction`, `restricted_energy`), then the restriction is lifted
/// and the structure refolds (`final_structure`, `final_energy`). The
/// `ensemble_energy` is the free energy of the full ensemble.
///
/// Records are values: all fields are set by [CandidateRecord::new] and
/// can only be read afterwards. Consistency between fields (e.g. matching
/// lengths of sequence and structures) is not checked here, that is up
/// to whoever produces the record.
///
/// # Example
/// ```rust
/// use rf_candidate::CandidateRecord;
///
/// let c = CandidateRecord::new(
///     "GGGGAAAACCCC",
///     "xxx.........",
///     -1.20,
///     "((((....))))",
///     -4.10,
///     -4.52,
/// );
/// assert_eq!(c.final_structure(), "((((....))))");
/// assert_eq!(c.final_energy(), -4.10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    sequence: String,
    restriction: String,
    #[serde(with = "energy_serde")]
    restricted_energy: f64,
    final_structure: String,
    #[serde(with = "energy_serde")]
    final_energy: f64,
    #[serde(with = "energy_serde")]
    ensemble_energy: PfEnergy,
}

/// JSON has no NaN or infinity: non-finite energies are written as the
/// strings "NaN", "inf" and "-inf".
mod energy_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Energy {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Energy::deserialize(deserializer)? {
            Energy::Number(x) => Ok(x),
            Energy::Text(s) => s.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid energy '{}'", s))),
        }
    }
}

impl CandidateRecord {
    pub fn new(
        sequence: impl Into<String>,
        restriction: impl Into<String>,
        restricted_energy: f64,
        final_structure: impl Into<String>,
        final_energy: f64,
        ensemble_energy: PfEnergy,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            restriction: restriction.into(),
            restricted_energy,
            final_structure: final_structure.into(),
            final_energy,
            ensemble_energy,
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn restriction(&self) -> &str {
        &self.restriction
    }

    pub fn restricted_energy(&self) -> f64 {
        self.restricted_energy
    }

    pub fn final_structure(&self) -> &str {
        &self.final_structure
    }

    pub fn final_energy(&self) -> f64 {
        self.final_energy
    }

    pub fn ensemble_energy(&self) -> PfEnergy {
        self.ensemble_energy
    }

    /// Tab-separated table line, parsed back by `TryFrom<&str>`.
    ///
    /// Fields containing tabs or line breaks cannot be represented, see
    /// [CandidateRecord::unrepresentable_field].
    pub fn to_line(&self) -> String {
        format!("{}\t{}\t{}\t{}\t{}\t{}",
            self.sequence,
            self.restriction,
            self.restricted_energy,
            self.final_structure,
            self.final_energy,
            self.ensemble_energy,
        )
    }

    /// The first text column (name and value) that would break a table
    /// line, if any.
    pub fn unrepresentable_field(&self) -> Option<(&'static str, &str)> {
        [
            (COLUMNS[0], &self.sequence),
            (COLUMNS[1], &self.restriction),
            (COLUMNS[3], &self.final_structure),
        ].into_iter()
            .find(|(_, value)| value.contains(['\t', '\n', '\r']))
            .map(|(name, value)| (name, value.as_str()))
    }
}

pub(crate) const COLUMNS: [&str; 6] = [
    "sequence",
    "restriction",
    "restricted_energy",
    "final_structure",
    "final_energy",
    "ensemble_energy",
];

/// Parse a table line. Lines containing a tab are split on tabs and keep
/// empty fields, other lines are split on whitespace runs. Reported line
/// numbers are 0, readers fill in the actual position.
impl TryFrom<&str> for CandidateRecord {
    type Error = CandidateError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut tokens: Box<dyn Iterator<Item = &str> + '_> = if line.contains('\t') {
            Box::new(line.split('\t'))
        } else {
            Box::new(line.split_whitespace())
        };
        let mut next = |idx: usize| {
            tokens.next().ok_or(CandidateError::MissingField {
                line: 0,
                field: COLUMNS[idx],
            })
        };

        let sequence = next(0)?;
        let restriction = next(1)?;
        let restricted_energy = next(2)?;
        let final_structure = next(3)?;
        let final_energy = next(4)?;
        let ensemble_energy = next(5)?;

        Ok(CandidateRecord::new(
            sequence,
            restriction,
            parse_energy(restricted_energy, COLUMNS[2])?,
            final_structure,
            parse_energy(final_energy, COLUMNS[4])?,
            parse_energy(ensemble_energy, COLUMNS[5])?,
        ))
    }
}

fn parse_energy(token: &str, field: &'static str) -> Result<f64, CandidateError> {
    token.trim().parse::<f64>().map_err(|_| CandidateError::InvalidEnergy {
        line: 0,
        field,
        value: token.to_string(),
    })
}

impl fmt::Display for CandidateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sequence)?;
        writeln!(f, "{} {:>6.2}", self.restriction, self.restricted_energy)?;
        write!(f, "{} {:>6.2} ({:.2})", self.final_structure, self.final_energy, self.ensemble_energy)
    }
}
