use common::types::TABLE_DIM_CHANNEL;
use enum_iterator::all;
use enum_iterator::Sequence;
use postgres::types::ToSql;
use strum_macros::Display;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

use crate::dims::DimensionRow;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, EnumString, IntoStaticStr)]
pub enum ChannelType {
    #[strum(serialize = "ONLINE")]
    Online,
    #[strum(serialize = "OFFLINE")]
    Offline,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr, Sequence)]
pub enum PayMethod {
    Cash,
    Card,
    BenefitPay,
    ApplePay,
    GooglePay,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr, Sequence)]
pub enum OperatingSystem {
    #[strum(serialize = "iOS")]
    Ios,
    Android,
    Web,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr, Sequence)]
pub enum Browser {
    Chrome,
    Safari,
    Firefox,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRow {
    pub channel_type: &'static str,
    pub system_name: Option<&'static str>,
    pub browser_name: Option<&'static str>,
    pub pay_method: &'static str,
}

impl DimensionRow for ChannelRow {
    const TABLE: &'static str = TABLE_DIM_CHANNEL;
    const COLUMNS: &'static [&'static str] =
        &["channel_type", "system_name", "browser_name", "pay_method"];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.channel_type,
            &self.system_name,
            &self.browser_name,
            &self.pay_method,
        ]
    }
}

/// Every offline pay method, then every online pay method x system x browser.
pub fn generate() -> Vec<ChannelRow> {
    let mut rows = Vec::new();
    for pm in all::<PayMethod>() {
        rows.push(ChannelRow {
            channel_type: ChannelType::Offline.into(),
            system_name: None,
            browser_name: None,
            pay_method: pm.into(),
        });
    }

    for pm in all::<PayMethod>() {
        for os in all::<OperatingSystem>() {
            for browser in all::<Browser>() {
                rows.push(ChannelRow {
                    channel_type: ChannelType::Online.into(),
                    system_name: Some(os.into()),
                    browser_name: Some(browser.into()),
                    pay_method: pm.into(),
                });
            }
        }
    }

    rows
}
