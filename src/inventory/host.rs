//! Host entries and parameter-set derivation.

use serde::Deserialize;

/// How the list of report rows is derived from the hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterSet {
    /// Only the parameters of the first host, in its order.
    FirstHost,
    /// The first host's parameters, then any new ones from later hosts in
    /// first-seen order.
    #[default]
    Union,
}

/// One host and its observed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Host name as it appears in the inventory.
    pub name: String,
    values: Vec<(String, String)>,
}

impl HostEntry {
    /// Create a host with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Builder-style value insert.
    pub fn with_value(mut self, parameter: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(parameter, value);
        self
    }

    /// Set a value, replacing an earlier one for the same parameter in place.
    pub fn set(&mut self, parameter: impl Into<String>, value: impl Into<String>) {
        let parameter = parameter.into();
        let value = value.into();
        match self.values.iter_mut().find(|(p, _)| *p == parameter) {
            Some(slot) => slot.1 = value,
            None => self.values.push((parameter, value)),
        }
    }

    /// Observed value for a parameter.
    pub fn get(&self, parameter: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| p == parameter)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter names in document order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(p, _)| p.as_str())
    }
}

/// All hosts from one inventory document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostReport {
    hosts: Vec<HostEntry>,
}

impl HostReport {
    /// Create a report from hosts.
    pub fn new(hosts: Vec<HostEntry>) -> Self {
        Self { hosts }
    }

    /// Hosts in document order.
    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    /// Host names in document order.
    pub fn host_names(&self) -> Vec<&str> {
        self.hosts.iter().map(|h| h.name.as_str()).collect()
    }

    /// Row parameters according to `set`.
    pub fn parameters(&self, set: ParameterSet) -> Vec<&str> {
        let mut params: Vec<&str> = Vec::new();
        let hosts = match set {
            ParameterSet::FirstHost => &self.hosts[..self.hosts.len().min(1)],
            ParameterSet::Union => &self.hosts[..],
        };
        for host in hosts {
            for name in host.parameter_names() {
                if !params.contains(&name) {
                    params.push(name);
                }
            }
        }
        params
    }

    /// Parameters present on some host but missing from the first one.
    ///
    /// These rows are dropped under [`ParameterSet::FirstHost`].
    pub fn parameters_outside_first_host(&self) -> Vec<&str> {
        let first = self.parameters(ParameterSet::FirstHost);
        self.parameters(ParameterSet::Union)
            .into_iter()
            .filter(|p| !first.contains(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HostReport {
        HostReport::new(vec![
            HostEntry::new("a")
                .with_value("agent_version", "2.5")
                .with_value("svc_status", "Running"),
            HostEntry::new("b")
                .with_value("svc_status", "inactive")
                .with_value("kernel", "6.1"),
        ])
    }

    #[test]
    fn first_host_parameters_only() {
        assert_eq!(
            sample().parameters(ParameterSet::FirstHost),
            vec!["agent_version", "svc_status"]
        );
    }

    #[test]
    fn union_appends_new_parameters_in_order() {
        assert_eq!(
            sample().parameters(ParameterSet::Union),
            vec!["agent_version", "svc_status", "kernel"]
        );
    }

    #[test]
    fn reports_parameters_outside_first_host() {
        assert_eq!(sample().parameters_outside_first_host(), vec!["kernel"]);
    }

    #[test]
    fn empty_report_has_no_parameters() {
        let report = HostReport::default();
        assert!(report.parameters(ParameterSet::FirstHost).is_empty());
        assert!(report.parameters(ParameterSet::Union).is_empty());
    }

    #[test]
    fn set_replaces_in_place() {
        let mut host = HostEntry::new("a").with_value("x", "1").with_value("y", "2");
        host.set("x", "3");
        assert_eq!(host.get("x"), Some("3"));
        assert_eq!(host.parameter_names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn missing_value_is_none() {
        assert!(sample().hosts()[1].get("agent_version").is_none());
    }
}
