//! Labeled results of a transform call.

use std::collections::BTreeMap;

use fnft_ffi::sys::{FNFT_COMPLEX, FNFT_INT};
use fnft_ffi::{Error, Result};

/// Field names used in a [`ResultSet`].
pub mod keys {
    /// Native return code; always present.
    pub const RETURN_VALUE: &str = "return_value";

    // nsev
    pub const BOUND_STATES_NUM: &str = "bound_states_num";
    pub const BOUND_STATES: &str = "bound_states";
    /// Norming constants.
    pub const D_NORM: &str = "d_norm";
    /// Residues.
    pub const D_RES: &str = "d_res";
    /// Reflection coefficient.
    pub const C_REF: &str = "c_ref";
    /// Scattering coefficient a.
    pub const C_A: &str = "c_a";
    /// Scattering coefficient b.
    pub const C_B: &str = "c_b";

    // nsep
    /// Number of points in the main spectrum.
    pub const K: &str = "k";
    pub const MAIN: &str = "main";
    /// Number of points in the auxiliary spectrum.
    pub const M: &str = "m";
    pub const AUX: &str = "aux";

    // kdvv
    pub const CONTSPEC: &str = "contspec";
}

/// A single value in a [`ResultSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(FNFT_INT),
    Count(usize),
    Complex(Vec<FNFT_COMPLEX>),
}

/// Mapping from field name to value, owned by the caller.
///
/// Which keys are present depends on the options of the call. A nonzero
/// return value is kept verbatim; the numerical fields of a failed call carry
/// whatever the native library left in its buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    return_value: FNFT_INT,
    fields: BTreeMap<&'static str, Field>,
}

impl ResultSet {
    pub(crate) fn new(return_value: FNFT_INT) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(keys::RETURN_VALUE, Field::Int(return_value));
        Self {
            return_value,
            fields,
        }
    }

    pub(crate) fn insert(&mut self, key: &'static str, field: Field) {
        self.fields.insert(key, field);
    }

    pub(crate) fn insert_complex(&mut self, key: &'static str, values: Vec<FNFT_COMPLEX>) {
        self.insert(key, Field::Complex(values));
    }

    pub fn return_value(&self) -> FNFT_INT {
        self.return_value
    }

    pub fn is_success(&self) -> bool {
        self.return_value() == 0
    }

    /// Turn a nonzero return value into [`Error::Native`].
    pub fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Native {
                code: self.return_value(),
            })
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Complex array stored under `key`.
    pub fn complex(&self, key: &str) -> Option<&[FNFT_COMPLEX]> {
        match self.fields.get(key) {
            Some(Field::Complex(values)) => Some(values),
            _ => None,
        }
    }

    /// Count stored under `key`.
    pub fn count(&self, key: &str) -> Option<usize> {
        match self.fields.get(key) {
            Some(Field::Count(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Field)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn into_fields(self) -> BTreeMap<&'static str, Field> {
        self.fields
    }
}
