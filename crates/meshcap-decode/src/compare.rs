//! Comparison of decoded records against reference fixtures.
//!
//! Integer values compare exactly; floating-point values compare with an
//! absolute tolerance, since reference fixtures are authored from one
//! GPU/driver's output and other implementations legitimately differ in the
//! last few ulps. A value of one numeric kind never matches a value of
//! another.

use crate::format::AttributeValue;
use crate::mesh::VertexRecord;

/// The first point where an actual record sequence diverges from the
/// expected one.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordMismatch {
    /// The sequences have different lengths.
    Length { actual: usize, expected: usize },
    /// Record `vtx` resolved a different logical index.
    Index {
        vtx: usize,
        actual_idx: i64,
        expected_idx: i64,
    },
    /// Record `vtx` is missing an expected attribute.
    MissingAttribute { vtx: usize, attribute: String },
    /// Record `vtx` carries an attribute the expectation does not.
    UnexpectedAttribute { vtx: usize, attribute: String },
    /// An attribute decoded to a different value.
    Value {
        vtx: usize,
        attribute: String,
        actual: AttributeValue,
        expected: AttributeValue,
    },
}

/// Whether two attribute values match: exact for integers, within `eps` for
/// floats, never across kinds.
pub fn values_match(actual: &AttributeValue, expected: &AttributeValue, eps: f64) -> bool {
    match (actual, expected) {
        (AttributeValue::Uint(a), AttributeValue::Uint(e)) => a == e,
        (AttributeValue::Sint(a), AttributeValue::Sint(e)) => a == e,
        (AttributeValue::Float(a), AttributeValue::Float(e)) => {
            a.len() == e.len() && a.iter().zip(e).all(|(a, e)| (a - e).abs() <= eps)
        }
        _ => false,
    }
}

/// Finds the first divergence between decoded records and a reference
/// sequence, or `None` if they match.
pub fn find_mismatch(
    actual: &[VertexRecord],
    expected: &[VertexRecord],
    eps: f64,
) -> Option<RecordMismatch> {
    if actual.len() != expected.len() {
        return Some(RecordMismatch::Length {
            actual: actual.len(),
            expected: expected.len(),
        });
    }

    for (a, e) in actual.iter().zip(expected) {
        if a.idx != e.idx {
            return Some(RecordMismatch::Index {
                vtx: a.vtx,
                actual_idx: a.idx,
                expected_idx: e.idx,
            });
        }

        for (name, expected_value) in &e.attributes {
            match a.attributes.get(name) {
                None => {
                    return Some(RecordMismatch::MissingAttribute {
                        vtx: a.vtx,
                        attribute: name.clone(),
                    })
                }
                Some(actual_value) if !values_match(actual_value, expected_value, eps) => {
                    return Some(RecordMismatch::Value {
                        vtx: a.vtx,
                        attribute: name.clone(),
                        actual: actual_value.clone(),
                        expected: expected_value.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for name in a.attributes.keys() {
            if !e.attributes.contains_key(name) {
                return Some(RecordMismatch::UnexpectedAttribute {
                    vtx: a.vtx,
                    attribute: name.clone(),
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(vtx: usize, idx: i64, attrs: &[(&str, AttributeValue)]) -> VertexRecord {
        VertexRecord {
            vtx,
            idx,
            attributes: attrs
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn integers_compare_exactly() {
        let a = AttributeValue::Uint(vec![1, 2]);
        assert!(values_match(&a, &AttributeValue::Uint(vec![1, 2]), 0.5));
        assert!(!values_match(&a, &AttributeValue::Uint(vec![1, 3]), 0.5));
    }

    #[test]
    fn floats_compare_within_eps() {
        let a = AttributeValue::Float(vec![1.0, 2.0]);
        assert!(values_match(&a, &AttributeValue::Float(vec![1.0005, 2.0]), 1e-3));
        assert!(!values_match(&a, &AttributeValue::Float(vec![1.01, 2.0]), 1e-3));
        assert!(!values_match(&a, &AttributeValue::Float(vec![1.0]), 1e-3));
    }

    #[test]
    fn kinds_never_cross_match() {
        let uint = AttributeValue::Uint(vec![1]);
        let float = AttributeValue::Float(vec![1.0]);
        assert!(!values_match(&uint, &float, 1.0));
    }

    #[test]
    fn first_divergence_is_reported() {
        let pos = ("POS", AttributeValue::Float(vec![0.0, 1.0]));
        let actual = vec![
            record(0, 0, &[pos.clone()]),
            record(1, 1, &[("POS", AttributeValue::Float(vec![0.5, 1.0]))]),
        ];
        let expected = vec![record(0, 0, &[pos.clone()]), record(1, 1, &[pos])];

        let got = find_mismatch(&actual, &expected, 1e-6);
        assert!(matches!(
            got,
            Some(RecordMismatch::Value { vtx: 1, ref attribute, .. }) if attribute == "POS"
        ));
    }

    #[test]
    fn attribute_set_differences_are_reported() {
        let actual = vec![record(0, 0, &[("POS", AttributeValue::Float(vec![0.0]))])];
        let expected = vec![record(
            0,
            0,
            &[
                ("POS", AttributeValue::Float(vec![0.0])),
                ("UV", AttributeValue::Float(vec![0.0])),
            ],
        )];
        assert!(matches!(
            find_mismatch(&actual, &expected, 0.0),
            Some(RecordMismatch::MissingAttribute { vtx: 0, ref attribute }) if attribute == "UV"
        ));
        assert!(matches!(
            find_mismatch(&expected, &actual, 0.0),
            Some(RecordMismatch::UnexpectedAttribute { vtx: 0, ref attribute }) if attribute == "UV"
        ));
    }

    #[test]
    fn matching_sequences_report_nothing() {
        let records = vec![record(0, 5, &[("POS", AttributeValue::Float(vec![1.0]))])];
        assert_eq!(find_mismatch(&records, &records.clone(), 0.0), None);
    }
}
