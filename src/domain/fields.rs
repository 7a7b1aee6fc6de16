/// One column of the form: its label and its position in the output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub index: usize,
    pub label: String,
}

impl FieldDefinition {
    pub fn display_label(&self) -> String {
        format!("{}:", self.label)
    }
}

/// Ordered, non-empty set of column labels, fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldDefinition>,
}

impl FieldSet {
    /// Returns `None` when `labels` is empty.
    pub fn new<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| FieldDefinition {
                index,
                label: label.into(),
            })
            .collect::<Vec<_>>();
        if fields.is_empty() {
            None
        } else {
            Some(Self { fields })
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FieldDefinition> {
        self.fields.get(index)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|field| field.label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_label_order_and_positions() {
        let set = FieldSet::new(["ID", "Name", "Age"]).expect("fields");
        assert_eq!(set.len(), 3);
        assert_eq!(set.labels(), vec!["ID", "Name", "Age"]);
        let age = set.get(2).expect("age");
        assert_eq!(age.index, 2);
        assert_eq!(age.display_label(), "Age:");
    }

    #[test]
    fn rejects_empty_label_list() {
        assert!(FieldSet::new(Vec::<String>::new()).is_none());
    }
}
