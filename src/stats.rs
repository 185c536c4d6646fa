use crate::convert::FieldOutcome;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub records: usize,
    pub rejected_records: usize,
    pub passed_through: usize,
    pub converted: usize,
    pub missing: usize,
    pub null: usize,
    pub unsupported: usize,
    pub failed: usize,
}

impl ConvertStats {
    pub fn apply_outcome(&mut self, outcome: &FieldOutcome) {
        match outcome {
            FieldOutcome::Converted => self.converted += 1,
            FieldOutcome::Missing => self.missing += 1,
            FieldOutcome::Null => self.null += 1,
            FieldOutcome::Unsupported => self.unsupported += 1,
            FieldOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn apply_record<'a, I>(&mut self, outcomes: I)
    where
        I: IntoIterator<Item = &'a FieldOutcome>,
    {
        self.records += 1;
        for outcome in outcomes {
            self.apply_outcome(outcome);
        }
    }

    pub fn skipped(&self) -> usize {
        self.missing + self.null + self.unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConvertError, ParseError};

    #[test]
    fn tallies_outcomes() {
        let mut stats = ConvertStats::default();
        stats.apply_record(&[
            FieldOutcome::Converted,
            FieldOutcome::Missing,
            FieldOutcome::Null,
            FieldOutcome::Unsupported,
            FieldOutcome::Failed(ConvertError::Parse {
                field: "size".into(),
                source: ParseError::Empty,
            }),
        ]);
        stats.apply_record(&[FieldOutcome::Converted]);

        assert_eq!(stats.records, 2);
        assert_eq!(stats.converted, 2);
        assert_eq!(stats.skipped(), 3);
        assert_eq!(stats.failed, 1);
    }
}
