//! Share codes: the user-facing state as a query string, e.g.
//! `?lang=zh-CN&pot=cookpot&recipes=meat,meat,berries`, so a pot can be
//! shared and restored. Decoding is forgiving: unknown values fall back
//! to defaults and unknown ingredient keys are dropped.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::{
    data::{ingredient::IngredientType, pot::PotType},
    i18n::Language,
    state::pot::POT_SLOTS,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareState {
    pub language: Language,
    pub pot: PotType,
    pub ingredients: Vec<IngredientType>,
}

pub fn encode(language: Language, pot: PotType, ingredients: &[IngredientType]) -> String {
    let recipes = ingredients.iter().map(|i| i.key()).join(",");
    format!(
        "?lang={}&pot={}&recipes={}",
        language.key(),
        pot.key(),
        recipes
    )
}

pub fn decode(code: &str) -> ShareState {
    let params = code
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect::<FxHashMap<_, _>>();

    let language = params
        .get("lang")
        .and_then(|key| {
            let found = Language::from_key(key);
            if found.is_none() {
                log::warn!("Unknown language in share code: {key:?}");
            }
            found
        })
        .unwrap_or_default();

    let pot = params
        .get("pot")
        .and_then(|key| {
            let found = PotType::from_key(key);
            if found.is_none() {
                log::warn!("Unknown pot in share code: {key:?}");
            }
            found
        })
        .unwrap_or_default();

    let ingredients = params
        .get("recipes")
        .map(|list| {
            list.split(',')
                .filter(|key| !key.is_empty())
                .filter_map(|key| {
                    let found = IngredientType::from_key(key);
                    if found.is_none() {
                        log::warn!("Unknown ingredient in share code: {key:?}");
                    }
                    found
                })
                .take(POT_SLOTS)
                .collect()
        })
        .unwrap_or_default();

    ShareState {
        language,
        pot,
        ingredients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IngredientType::*;

    #[test]
    fn encode_decode_round_trips() {
        let ingredients = vec![Meat, Meat, Berries];
        let code = encode(Language::ZhCn, PotType::PortableCookpot, &ingredients);
        assert_eq!(
            code,
            "?lang=zh-CN&pot=portablecookpot&recipes=meat,meat,berries"
        );

        let decoded = decode(&code);
        assert_eq!(decoded.language, Language::ZhCn);
        assert_eq!(decoded.pot, PotType::PortableCookpot);
        assert_eq!(decoded.ingredients, ingredients);
    }

    #[test]
    fn empty_selection_round_trips() {
        let code = encode(Language::EnUs, PotType::Cookpot, &[]);
        let decoded = decode(&code);
        assert_eq!(decoded, ShareState::default());
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let decoded = decode("?lang=fr-FR&pot=cauldron&recipes=meat,doesnotexist,egg");
        assert_eq!(decoded.language, Language::EnUs);
        assert_eq!(decoded.pot, PotType::Cookpot);
        assert_eq!(decoded.ingredients, vec![Meat, Egg]);
    }

    #[test]
    fn overlong_ingredient_lists_are_truncated() {
        let decoded = decode("?recipes=meat,meat,meat,meat,meat,meat");
        assert_eq!(decoded.ingredients.len(), POT_SLOTS);
    }

    #[test]
    fn garbage_decodes_to_defaults() {
        assert_eq!(decode(""), ShareState::default());
        assert_eq!(decode("?????"), ShareState::default());
        assert_eq!(decode("not a share code at all"), ShareState::default());
    }
}
