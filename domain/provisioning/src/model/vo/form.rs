use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Submitted form fields in submission order.
///
/// A field may carry several values (checkbox groups such as `env` or `type`);
/// [`FormFields::collapse`] turns those into the comma-joined form the rules
/// and the store expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value of `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        self.get_opt(name).unwrap_or_default()
    }

    pub fn get_opt(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    pub fn all(&self, name: &str) -> Vec<&str> {
        self.0.iter().filter(|(k, _)| k == name).map(|(_, v)| v.as_str()).collect()
    }

    /// Replaces every value of `name` with a single one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == name) {
            Some(first) => {
                self.0[first].1 = value;
                let mut idx = 0;
                self.0.retain(|(k, _)| {
                    let keep = idx <= first || k != name;
                    idx += 1;
                    keep
                });
            }
            None => self.0.push((name.to_owned(), value)),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|(k, _)| k != name);
    }

    /// Joins all values of `name` with commas, stores the joined value back
    /// and returns the individual values.
    ///
    /// An absent field becomes an empty value so that requiredness rules see it.
    pub fn collapse(&mut self, name: &str) -> Vec<String> {
        let values = self.all(name).into_iter().map(str::to_owned).collect::<Vec<_>>();
        self.set(name, values.join(","));
        values
    }

    /// Appends the fields of `other`, letting `other` win on duplicate names.
    pub fn merge(&mut self, other: &FormFields) {
        for (k, _) in other.iter() {
            self.remove(k);
        }
        self.0.extend(other.0.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flat view for rendering, multi-valued fields comma-joined.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::<String, String>::new();
        for (k, v) in self.iter() {
            map.entry(k.to_owned())
                .and_modify(|joined| {
                    joined.push(',');
                    joined.push_str(v);
                })
                .or_insert_with(|| v.to_owned());
        }
        map
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_joins_checkbox_values() {
        let mut form: FormFields = [("env", "dev"), ("name", "x"), ("env", "prd")].into_iter().collect();
        let envs = form.collapse("env");
        assert_eq!(envs, vec!["dev", "prd"]);
        assert_eq!(form.get("env"), "dev,prd");
        assert_eq!(form.all("env").len(), 1);
    }

    #[test]
    fn collapse_of_missing_field_is_empty() {
        let mut form = FormFields::new();
        assert!(form.collapse("type").is_empty());
        assert!(form.contains("type"));
        assert_eq!(form.get("type"), "");
    }

    #[test]
    fn merge_overrides_duplicates() {
        let mut base: FormFields = [("a", "1"), ("b", "2")].into_iter().collect();
        let other: FormFields = [("b", "3"), ("c", "4")].into_iter().collect();
        base.merge(&other);
        assert_eq!(base.get("a"), "1");
        assert_eq!(base.get("b"), "3");
        assert_eq!(base.get("c"), "4");
    }
}
