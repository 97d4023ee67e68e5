/// A contract method, declared once as static configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: &'static str,
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
}

/// A contract event. `topics` are the indexed fields, `data` the rest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EventSpec {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub data: &'static [&'static str],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContractSpec {
    pub name: &'static str,
    pub methods: &'static [MethodSpec],
    pub events: &'static [EventSpec],
}
