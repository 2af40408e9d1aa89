//! Entry-form state, field dependencies, and submission.
//!
//! Form values are kept as strings, mirroring the input controls: a numeric
//! field left blank stays `""` (never `"0"`), and a full reset restores the
//! declared empty value of every field. The category/sub-category cascade
//! is a declared dependency rule, not ad hoc resets: whenever a parent
//! changes, dependents holding a now-illegal value are cleared.

use crate::api_client;
use common::converters::fixed_price;
use common::taxonomy::sub_categories_for;
use common::{NewSaleRequest, ProductRecord};
use chrono::NaiveDate;

/// Fields of the sale entry form, in display order.
pub const SALE_FIELDS: [&str; 17] = [
    "order_date",
    "customer_id",
    "customer_name",
    "segment",
    "country",
    "city",
    "state",
    "postal_code",
    "region",
    "product_id",
    "category",
    "sub_category",
    "product_name",
    "sales",
    "quantity",
    "discount",
    "profit",
];

/// Fields of the product entry form, in display order.
pub const PRODUCT_FIELDS: [&str; 6] = [
    "product_id",
    "product_name",
    "category",
    "sub_category",
    "price",
    "stock_level",
];

const REQUIRED_PRODUCT_FIELDS: [&str; 4] =
    ["product_id", "product_name", "category", "sub_category"];

// ===================== Form state =====================

/// Ordered field-name → value map with a declared empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<(&'static str, String)>,
}

impl FormState {
    pub fn new(names: &[&'static str]) -> Self {
        FormState {
            fields: names.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    /// Current value of a field; unknown names read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Set a field directly, without evaluating dependency rules. Use
    /// [`FieldDependencyGraph::set_field`] for user-driven edits.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value.into(),
            None => log::warn!("Ignoring value for undeclared form field '{}'", name),
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.value(name).is_empty()
    }

    /// Clear every field back to its declared empty value.
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }
}

// ===================== Dependency graph =====================

/// One dependency edge: the parent's current value determines the
/// dependent's legal option set.
pub struct DependencyRule {
    pub parent: &'static str,
    pub dependent: &'static str,
    pub options: fn(&str) -> &'static [&'static str],
}

/// Declarative form-field dependencies, re-evaluated on every parent change.
pub struct FieldDependencyGraph {
    rules: Vec<DependencyRule>,
}

impl FieldDependencyGraph {
    pub fn new(rules: Vec<DependencyRule>) -> Self {
        FieldDependencyGraph { rules }
    }

    /// Legal options for a dependent field given the form's current state.
    /// Fields without a rule have no constrained option set.
    pub fn options(&self, form: &FormState, dependent: &str) -> &'static [&'static str] {
        self.rules
            .iter()
            .find(|rule| rule.dependent == dependent)
            .map(|rule| (rule.options)(form.value(rule.parent)))
            .unwrap_or(&[])
    }

    /// A dependent field is disabled while its parent has no value.
    pub fn is_enabled(&self, form: &FormState, field: &str) -> bool {
        self.rules
            .iter()
            .find(|rule| rule.dependent == field)
            .map(|rule| !form.is_blank(rule.parent))
            .unwrap_or(true)
    }

    /// Apply a user edit: set the field, then clear any dependent whose
    /// current value fell outside its new legal set.
    pub fn set_field(&self, form: &mut FormState, name: &str, value: impl Into<String>) {
        form.set_value(name, value);
        for rule in self.rules.iter().filter(|rule| rule.parent == name) {
            let legal = (rule.options)(form.value(name));
            let current = form.value(rule.dependent);
            if !current.is_empty() && !legal.iter().any(|option| *option == current) {
                log::debug!(
                    "Clearing '{}': '{}' is not legal under the new '{}'",
                    rule.dependent,
                    current,
                    name
                );
                form.set_value(rule.dependent, "");
            }
        }
    }
}

fn category_rule() -> DependencyRule {
    DependencyRule {
        parent: "category",
        dependent: "sub_category",
        options: sub_categories_for,
    }
}

/// Empty sale entry form plus its dependency graph.
pub fn sale_form() -> (FormState, FieldDependencyGraph) {
    (
        FormState::new(&SALE_FIELDS),
        FieldDependencyGraph::new(vec![category_rule()]),
    )
}

/// Empty product entry form plus its dependency graph.
pub fn product_form() -> (FormState, FieldDependencyGraph) {
    (
        FormState::new(&PRODUCT_FIELDS),
        FieldDependencyGraph::new(vec![category_rule()]),
    )
}

// ===================== Submission =====================

fn parse_f64_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_i64_or_zero(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_rounded_i64(raw: &str) -> i64 {
    raw.trim()
        .parse::<f64>()
        .map(|value| value.round() as i64)
        .unwrap_or(0)
}

/// Coerce and serialize the sale form into a write request. Declared
/// numeric fields fall back to zero when unparsable; the order date is the
/// one field required before a submission is attempted.
pub fn build_sale_request(form: &FormState) -> Result<NewSaleRequest, String> {
    let order_date = NaiveDate::parse_from_str(form.value("order_date"), "%Y-%m-%d")
        .map_err(|_| "Order date is required".to_string())?;

    Ok(NewSaleRequest {
        order_date,
        customer_id: form.value("customer_id").to_string(),
        customer_name: form.value("customer_name").to_string(),
        segment: form.value("segment").to_string(),
        country: form.value("country").to_string(),
        city: form.value("city").to_string(),
        state: form.value("state").to_string(),
        postal_code: form.value("postal_code").to_string(),
        region: form.value("region").to_string(),
        product_id: form.value("product_id").to_string(),
        category: form.value("category").to_string(),
        sub_category: form.value("sub_category").to_string(),
        product_name: form.value("product_name").to_string(),
        sales: parse_f64_or_zero(form.value("sales")),
        quantity: parse_i64_or_zero(form.value("quantity")),
        discount: parse_f64_or_zero(form.value("discount")),
        profit: parse_f64_or_zero(form.value("profit")),
        avg_for_week: 0.0,
        avg_for_month: 0.0,
        week_sales: 0.0,
        month_sales: 0.0,
        day_sales: 0.0,
    })
}

/// Coerce and serialize the product form into a write request. Identity
/// and taxonomy fields are required; price and stock level fall back to
/// zero when unparsable.
pub fn build_product_request(form: &FormState) -> Result<ProductRecord, String> {
    for name in REQUIRED_PRODUCT_FIELDS {
        if form.is_blank(name) {
            return Err(format!("{} is required", name));
        }
    }

    Ok(ProductRecord {
        product_id: form.value("product_id").to_string(),
        product_name: form.value("product_name").to_string(),
        category: form.value("category").to_string(),
        sub_category: form.value("sub_category").to_string(),
        price: fixed_price(parse_f64_or_zero(form.value("price"))),
        stock_level: parse_rounded_i64(form.value("stock_level")),
    })
}

/// Validate, serialize and post the sale form. On success the form is
/// fully reset; on failure the server's payload is surfaced verbatim.
pub async fn submit_sale(form: &mut FormState) -> Result<(), String> {
    let request = build_sale_request(form)?;
    api_client::records::create_sale(&request).await?;
    form.reset();
    Ok(())
}

/// Validate, serialize and post the product form. Same contract as
/// [`submit_sale`].
pub async fn submit_product(form: &mut FormState) -> Result<(), String> {
    let request = build_product_request(form)?;
    api_client::products::create_product(&request).await?;
    form.reset();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_change_clears_stale_sub_category() {
        let (mut form, graph) = sale_form();
        graph.set_field(&mut form, "category", "Furniture");
        graph.set_field(&mut form, "sub_category", "Chairs");
        graph.set_field(&mut form, "category", "Technology");

        assert_eq!(form.value("sub_category"), "");
        assert_eq!(
            graph.options(&form, "sub_category"),
            ["Phones", "Machines", "Accessories", "Copiers"]
        );
    }

    #[test]
    fn sub_category_survives_when_still_legal() {
        let (mut form, graph) = sale_form();
        graph.set_field(&mut form, "category", "Furniture");
        graph.set_field(&mut form, "sub_category", "Tables");
        graph.set_field(&mut form, "category", "Furniture");

        assert_eq!(form.value("sub_category"), "Tables");
    }

    #[test]
    fn sub_category_disabled_without_category() {
        let (mut form, graph) = product_form();
        assert!(!graph.is_enabled(&form, "sub_category"));
        graph.set_field(&mut form, "category", "Office Supplies");
        assert!(graph.is_enabled(&form, "sub_category"));
    }

    #[test]
    fn reset_restores_declared_empty_state() {
        let (mut form, graph) = sale_form();
        graph.set_field(&mut form, "category", "Technology");
        graph.set_field(&mut form, "sub_category", "Phones");
        graph.set_field(&mut form, "sales", "199.99");
        graph.set_field(&mut form, "quantity", "3");

        form.reset();
        assert_eq!(form, sale_form().0);
        // numeric fields come back blank, not zero
        assert_eq!(form.value("sales"), "");
        assert_eq!(form.value("quantity"), "");
    }

    #[test]
    fn sale_request_coerces_numbers_with_zero_fallback() {
        let (mut form, graph) = sale_form();
        graph.set_field(&mut form, "order_date", "2024-03-01");
        graph.set_field(&mut form, "sales", "not a number");
        graph.set_field(&mut form, "quantity", "3");
        graph.set_field(&mut form, "discount", "");
        graph.set_field(&mut form, "profit", "40.5");

        let request = build_sale_request(&form).unwrap();
        assert_eq!(request.sales, 0.0);
        assert_eq!(request.quantity, 3);
        assert_eq!(request.discount, 0.0);
        assert_eq!(request.profit, 40.5);
    }

    #[test]
    fn sale_request_requires_order_date() {
        let (form, _) = sale_form();
        assert_eq!(
            build_sale_request(&form).unwrap_err(),
            "Order date is required"
        );
    }

    #[test]
    fn product_request_requires_taxonomy_fields() {
        let (mut form, graph) = product_form();
        graph.set_field(&mut form, "product_id", "P-1");
        graph.set_field(&mut form, "product_name", "Stapler");
        graph.set_field(&mut form, "category", "Office Supplies");

        assert_eq!(
            build_product_request(&form).unwrap_err(),
            "sub_category is required"
        );
    }

    #[test]
    fn product_request_normalizes_price_and_stock() {
        let (mut form, graph) = product_form();
        graph.set_field(&mut form, "product_id", "P-1");
        graph.set_field(&mut form, "product_name", "Stapler");
        graph.set_field(&mut form, "category", "Office Supplies");
        graph.set_field(&mut form, "sub_category", "Supplies");
        graph.set_field(&mut form, "price", "19.5");
        graph.set_field(&mut form, "stock_level", "7.6");

        let request = build_product_request(&form).unwrap();
        assert_eq!(request.price, "19.50");
        assert_eq!(request.stock_level, 8);
    }
}
