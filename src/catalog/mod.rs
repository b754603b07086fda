//! The endpoint catalog: every report the API serves, its path, and its documented filters.
//!
//! Each entry becomes a variant of [`Endpoint`] and an `async fn` on [`OmnibusClient`] that
//! forwards its parameters to [`OmnibusClient::request`] unchanged.

mod params;

pub use params::ParamSpec;

use crate::core::{OmnibusClient, OmnibusError, QueryParams};
use params::{
    ACCOUNTS, BALANCE_DATE, CLIENTS, COUNTERPARTIES, CURRENCY, DESTINATIONS, FROM, FROM_REQUIRED,
    INSTRUMENT, POSITION_DATE, SEARCH, SHOW_ZERO_VALUED, TO, TO_REQUIRED,
};
use serde_json::Value;
use std::fmt;

macro_rules! catalog {
    ($(
        $(#[$extra:meta])*
        $variant:ident => $method:ident, $path:literal, $desc:literal, [$($param:expr),* $(,)?];
    )*) => {
        /// A catalog endpoint.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $(
                #[doc = concat!($desc, " (`", $path, "`).")]
                $variant,
            )*
        }

        impl Endpoint {
            /// Every endpoint, in catalog order.
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant),*];

            /// Path relative to `{host}/api/`.
            pub const fn path(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $path,)*
                }
            }

            /// Name of the matching [`OmnibusClient`] method.
            pub const fn method_name(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => stringify!($method),)*
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $desc,)*
                }
            }

            /// The filters the API documents for this endpoint.
            pub fn params(self) -> &'static [ParamSpec] {
                match self {
                    $(Endpoint::$variant => &[$($param),*],)*
                }
            }
        }

        impl OmnibusClient {
            $(
                #[doc = concat!("Get ", $desc, " data: `GET /api/", $path, "`.")]
                ///
                /// See [`Endpoint::params`] for the documented filters.
                $(#[$extra])*
                pub async fn $method(
                    &self,
                    params: impl Into<QueryParams>,
                ) -> Result<Value, OmnibusError> {
                    self.call(Endpoint::$variant, params).await
                }
            )*
        }
    };
}

catalog! {
    Me => me, "user", "Information about your user account", [];

    IressCommissions => iress_commissions, "iress/commissions", "Iress commissions",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressDividends => iress_dividends, "iress/dividends", "Iress dividends",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    /// The server-side path is `ress/dividendtax`, without the leading `i` the other Iress
    /// paths have. It is kept as published; use
    /// `request("iress/dividendtax", params)` if the server expects the regular spelling.
    IressDividendTax => iress_dividend_tax, "ress/dividendtax", "Iress dividend tax",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressFinancing => iress_financing, "iress/financing", "Iress financing",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressGreekTax => iress_greek_tax, "iress/greektax", "Iress Greek tax",
        [FROM, TO, ACCOUNTS, CLIENTS, SEARCH];
    IressInterest => iress_interest, "iress/interest", "Iress interest",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS];
    IressItalianTax => iress_italian_tax, "iress/italiantax", "Iress Italian tax",
        [FROM, TO, ACCOUNTS, CLIENTS, SEARCH];
    IressShortBorrowing => iress_short_borrowing, "iress/shortborrowing", "Iress short borrowing",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressMoneyFlow => iress_money_flow, "iress/moneyflow", "Iress money flow",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS];
    IressMoneyFlowTotals => iress_money_flow_totals, "iress/moneyflow/totals",
        "Iress money flow totals",
        [FROM_REQUIRED, TO_REQUIRED, CURRENCY, ACCOUNTS, CLIENTS];
    IressMoneyFlowNet => iress_money_flow_net, "iress/moneyflow/net", "Iress money flow net",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS];
    IressMoneyFlowNetTotals => iress_money_flow_net_totals, "iress/moneyflow/net/totals",
        "Iress money flow net totals",
        [FROM_REQUIRED, TO_REQUIRED, CURRENCY, ACCOUNTS, CLIENTS];
    IressTransactions => iress_transactions, "iress/transactions", "Iress transactions",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressAccountBalances => iress_account_balances, "iress/accountbalances",
        "Iress account balances",
        [BALANCE_DATE, CURRENCY, ACCOUNTS, CLIENTS];
    IressAvgPositions => iress_avg_positions, "iress/avgpositions", "Iress average positions",
        [POSITION_DATE, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressNetBalances => iress_net_balances, "iress/netbalances", "Iress net balances",
        [BALANCE_DATE, CURRENCY, ACCOUNTS, CLIENTS];
    IressPositions => iress_positions, "iress/positions", "Iress positions",
        [POSITION_DATE, CURRENCY, ACCOUNTS, CLIENTS, SEARCH];
    IressTrades => iress_trades, "iress/trades", "Iress trades",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SEARCH, DESTINATIONS, COUNTERPARTIES];

    DevexCommissions => devex_commissions, "devex/commissions", "Devex commissions",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexFinancing => devex_financing, "devex/financing", "Devex financing",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexInterest => devex_interest, "devex/interest", "Devex interest",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS];
    DevexItalianTax => devex_italian_tax, "devex/italiantax", "Devex Italian tax",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexShortBorrowing => devex_short_borrowing, "devex/shortborrowing", "Devex short borrowing",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexMoneyFlow => devex_money_flow, "devex/moneyflow", "Devex money flow",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SHOW_ZERO_VALUED];
    DevexMoneyFlowTotals => devex_money_flow_totals, "devex/moneyflow/totals",
        "Devex money flow totals",
        [FROM_REQUIRED, TO_REQUIRED, CURRENCY, ACCOUNTS, CLIENTS];
    DevexTransactions => devex_transactions, "devex/transactions", "Devex transactions",
        [FROM, TO, CURRENCY, ACCOUNTS, CLIENTS, SHOW_ZERO_VALUED];
    DevexAvgPositions => devex_avg_positions, "devex/avgpositions", "Devex average positions",
        [POSITION_DATE, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexClosedPositions => devex_closed_positions, "devex/closedpositions",
        "Devex closed positions",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexPositions => devex_positions, "devex/positions", "Devex positions",
        [POSITION_DATE, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
    DevexTrades => devex_trades, "devex/trades", "Devex trades",
        [FROM, TO, CURRENCY, INSTRUMENT, ACCOUNTS, CLIENTS];
}

impl Endpoint {
    /// Looks an endpoint up by its client method name, e.g. `"iress_trades"`.
    pub fn from_method_name(name: &str) -> Option<Endpoint> {
        Self::ALL.iter().copied().find(|e| e.method_name() == name)
    }

    /// Documented required filters absent from `params`.
    pub fn missing_required(self, params: &QueryParams) -> Vec<&'static str> {
        self.params()
            .iter()
            .filter(|p| p.required && !params.contains(p.name))
            .map(|p| p.name)
            .collect()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

impl OmnibusClient {
    /// Calls a catalog endpoint by value.
    ///
    /// Parameters are sent as given. A documented required filter that is missing is only
    /// logged; the server decides how to answer.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, params), err, fields(path = endpoint.path()))
    )]
    pub async fn call(
        &self,
        endpoint: Endpoint,
        params: impl Into<QueryParams>,
    ) -> Result<Value, OmnibusError> {
        let params = params.into();

        #[cfg(feature = "tracing")]
        {
            let missing = endpoint.missing_required(&params);
            if !missing.is_empty() {
                tracing::warn!(?missing, "required filters not supplied");
            }
        }

        self.request(endpoint.path(), params).await
    }
}
