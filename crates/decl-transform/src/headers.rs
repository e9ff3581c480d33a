//! Translation of localized column headers to canonical field names.
//!
//! Declaration exports carry Russian column titles. Each canonical field
//! accepts a small set of spellings; matching is exact and case-sensitive
//! after surrounding whitespace is stripped from both sides.

use std::collections::HashMap;
use std::sync::LazyLock;

use polars::prelude::{Column, DataFrame};
use tracing::{debug, warn};

use crate::error::Result;

pub const CONTAINER_COUNT: &str = "container_count";
pub const REGISTRATION_DATE: &str = "registration_date";
pub const GROSS_WEIGHT_KG: &str = "gross_weight_kg";
pub const NET_WEIGHT_KG: &str = "net_weight_kg";

/// Alias sets and the canonical field name each one maps to.
pub const HEADER_ALIASES: &[(&[&str], &str)] = &[
    (&["Сектор отрасли производства"], "production_industry_sector"),
    (&["Код таможни"], "custom_code"),
    (&["Дата регистрации"], REGISTRATION_DATE),
    (&["ИНН отправителя"], "sender_tin"),
    (&["Наименование отправителя"], "sender_name"),
    (&["Наименование получателя"], "recipient_name"),
    (&["ИНН декларанта"], "declarant_tin"),
    (&["Наименование декларанта"], "declarant_name"),
    (&["Код страны нахождения декларанта"], "declarant_country_code"),
    (&["Страна назначения"], "destination_country"),
    (&["Признак контейнерных перевозок"], "container_transportation_sign"),
    (&["Условие поставки"], "delivery_condition"),
    (&["Пункт поставки товара"], "goods_delivery_point"),
    (&["Свидетельство СВХ"], "svh_certificate"),
    (&["Название станции/склада"], "station_warehouse_name"),
    (&["Район склада"], "warehouse_area"),
    (&["Город склада"], "warehouse_city"),
    (&["Улица склада"], "warehouse_street"),
    (&["Наименование и характеристики товаров"], "goods_description"),
    (&["G31_13 (Страна происхождения)", "G31_13"], "origin_country"),
    (&["Кол-во контейнеров"], CONTAINER_COUNT),
    (&["Код товара по ТН ВЭД"], "tnved_code"),
    (&["Вес брутто, кг"], GROSS_WEIGHT_KG),
    (&["Вес нетто, кг"], NET_WEIGHT_KG),
    (&["ИНН производителя"], "manufacturer_tin"),
    (&["Холдинг/компания-учредитель"], "holding_founder_company"),
    (&["Комментарий по товарам"], "goods_comment"),
];

/// Stripped alias -> canonical name.
static HEADER_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (aliases, canonical) in HEADER_ALIASES {
        for alias in *aliases {
            map.insert(alias.trim(), *canonical);
        }
    }
    map
});

/// Returns the canonical field name for a raw header, if it has one.
pub fn canonical_name(header: &str) -> Option<&'static str> {
    HEADER_LOOKUP.get(header.trim()).copied()
}

/// A column that received a canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedColumn {
    /// Header text as found in the sheet.
    pub source: String,
    /// Canonical field name.
    pub target: &'static str,
}

/// How a column competes for a canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    /// The header is an alias and would be renamed.
    Alias(&'static str),
    /// The header already is the canonical name.
    Literal(&'static str),
}

impl Claim {
    fn of(header: &str) -> Option<Self> {
        if let Some(canonical) = canonical_name(header) {
            return Some(Self::Alias(canonical));
        }
        HEADER_ALIASES
            .iter()
            .map(|(_, canonical)| *canonical)
            .find(|canonical| *canonical == header)
            .map(Self::Literal)
    }

    fn target(self) -> &'static str {
        match self {
            Self::Alias(canonical) | Self::Literal(canonical) => canonical,
        }
    }
}

/// Renames every recognized column to its canonical field name.
///
/// Unrecognized columns keep their original header text, untrimmed. When
/// several columns claim the same canonical name, the last one takes it.
/// Earlier alias columns keep their original headers; an earlier column
/// already named after the field is dropped, since its name is taken.
pub fn rename_columns(df: &mut DataFrame) -> Result<Vec<RenamedColumn>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let claims: Vec<Option<Claim>> = names.iter().map(|name| Claim::of(name)).collect();

    let mut winners: HashMap<&'static str, usize> = HashMap::new();
    for (idx, claim) in claims.iter().enumerate() {
        if let Some(claim) = claim
            && let Some(previous) = winners.insert(claim.target(), idx)
        {
            warn!(
                canonical = claim.target(),
                shadowed = %names[previous],
                column = %names[idx],
                "multiple columns translate to the same field; keeping the last one"
            );
        }
    }

    let mut renamed = Vec::new();
    let mut dropped = 0usize;
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for (idx, (column, name)) in df.get_columns().iter().zip(&names).enumerate() {
        let wins = |claim: Claim| winners.get(claim.target()) == Some(&idx);
        match claims[idx] {
            Some(claim @ Claim::Alias(canonical)) if wins(claim) => {
                let mut column = column.clone();
                column.rename(canonical.into());
                renamed.push(RenamedColumn {
                    source: name.clone(),
                    target: canonical,
                });
                columns.push(column);
            }
            Some(claim @ Claim::Literal(_)) if !wins(claim) => dropped += 1,
            _ => columns.push(column.clone()),
        }
    }

    *df = DataFrame::new(columns)?;
    debug!(
        renamed = renamed.len(),
        dropped,
        columns = names.len(),
        "renamed columns"
    );
    Ok(renamed)
}
