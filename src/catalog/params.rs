//! Documented filters accepted by the catalog endpoints.

/// One documented query parameter of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// Wire name, e.g. `showZeroValued`.
    pub name: &'static str,
    /// Whether the server documents the parameter as required.
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            description,
        }
    }

    const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: true,
            description,
        }
    }
}

pub(super) const FROM: ParamSpec = ParamSpec::optional("from", "The start of the date range.");
pub(super) const TO: ParamSpec = ParamSpec::optional("to", "The end of the date range.");
pub(super) const FROM_REQUIRED: ParamSpec =
    ParamSpec::required("from", "The start of the date range.");
pub(super) const TO_REQUIRED: ParamSpec = ParamSpec::required("to", "The end of the date range.");
pub(super) const BALANCE_DATE: ParamSpec = ParamSpec::required("date", "The balance date.");
pub(super) const POSITION_DATE: ParamSpec =
    ParamSpec::required("date", "Include positions open on this date.");
pub(super) const CURRENCY: ParamSpec = ParamSpec::optional(
    "currency",
    "The currencies to include (array or comma separated string).",
);
pub(super) const ACCOUNTS: ParamSpec = ParamSpec::optional(
    "accounts",
    "The accounts to include (array or comma separated string).",
);
pub(super) const CLIENTS: ParamSpec = ParamSpec::optional(
    "clients",
    "The clients to include (array or comma separated string).",
);
pub(super) const SEARCH: ParamSpec = ParamSpec::optional(
    "search",
    "A search string to match against instruments and exchanges.",
);
pub(super) const INSTRUMENT: ParamSpec = ParamSpec::optional(
    "instrument",
    "The instruments to include (array or comma separated string).",
);
pub(super) const DESTINATIONS: ParamSpec = ParamSpec::optional(
    "destinations",
    "The destinations to include (array or comma separated string).",
);
pub(super) const COUNTERPARTIES: ParamSpec = ParamSpec::optional(
    "counterparties",
    "The counterparties to include (array or comma separated string).",
);
pub(super) const SHOW_ZERO_VALUED: ParamSpec = ParamSpec::optional(
    "showZeroValued",
    "Pass in 1 to include zero valued records or 0 (default) to exclude them.",
);
