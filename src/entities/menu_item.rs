use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An entry of the cardápio. Never mutated once seeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub nome: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub preco: Decimal,
    #[serde(default)]
    pub descricao: String,
}

impl MenuItem {
    pub fn new(id: i64, nome: &str, preco: Decimal, descricao: &str) -> Self {
        Self {
            id,
            nome: nome.to_string(),
            preco,
            descricao: descricao.to_string(),
        }
    }
}

/// Built-in catalog, ordered by id.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            1,
            "Prato Feito",
            dec!(25.00),
            "Arroz, feijão, bife, batata frita e salada",
        ),
        MenuItem::new(
            2,
            "Suco Natural",
            dec!(8.00),
            "Laranja, limão ou maracujá (500ml)",
        ),
        MenuItem::new(3, "Refrigerante", dec!(6.00), "Lata 350ml"),
        MenuItem::new(
            4,
            "Feijoada Completa",
            dec!(42.00),
            "Serve uma pessoa, acompanha couve e farofa",
        ),
        MenuItem::new(5, "Pudim de Leite", dec!(12.00), "Fatia individual"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_is_sorted_and_unique() {
        let menu = default_menu();
        assert!(!menu.is_empty());
        assert!(menu.windows(2).all(|w| w[0].id < w[1].id));
        assert!(menu.iter().all(|m| m.id > 0 && !m.nome.is_empty()));
        assert!(menu.iter().all(|m| m.preco >= Decimal::ZERO));
    }

    #[test]
    fn menu_item_price_serializes_as_number() {
        let item = MenuItem::new(1, "Prato Feito", dec!(25.00), "");
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["nome"], "Prato Feito");
        assert_eq!(v["preco"].as_f64(), Some(25.0));
        assert_eq!(v["descricao"], "");
    }
}
