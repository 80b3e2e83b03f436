//! # Edit Session
//!
//! Transient state of the add/edit form shown in the modal. There is exactly one
//! session; the UI re-targets it on every Add or Edit click.
//!
//! Fields are held as raw text. Price and stock are only turned into numbers by
//! [`EditSession::submission`], through [`coerce_number`], and nothing is
//! validated: text that is not a number is submitted as NaN.

pub mod coerce;

pub use coerce::*;

use crate::model::{Product, ProductDraft, ProductId};
use tracing::debug;

pub const ADD_TITLE: &str = "Add Product";
pub const EDIT_TITLE: &str = "Edit Product";

/// Which submit action the form fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Create,
    /// Editing an existing product. The target is kept from the Edit click so the
    /// update goes to the product that was opened.
    Edit { target: ProductId },
}

/// One input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Stock,
}

/// Raw text of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl FormFields {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: format_number(product.price),
            stock: product.stock.to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
        };
        *slot = value.into();
    }

    /// Coerces the numeric fields and builds the request body.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: coerce_number(&self.price),
            stock: coerce_number(&self.stock),
        }
    }
}

/// What a submit turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ProductDraft),
    Update { id: ProductId, draft: ProductDraft },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    title: String,
    fields: FormFields,
}

impl EditSession {
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Add click: empty form in create mode.
    pub fn begin_create(&mut self) {
        self.mode = EditMode::Create;
        self.title = ADD_TITLE.to_string();
        self.fields = FormFields::default();
    }

    /// Edit click: form pre-filled from `product`, which becomes the update target.
    pub fn begin_edit(&mut self, product: &Product) {
        debug!(id = %product.id, "Editing product");
        self.mode = EditMode::Edit { target: product.id };
        self.title = EDIT_TITLE.to_string();
        self.fields = FormFields::from_product(product);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Resets the inputs and the title after a successful submit. The mode is left
    /// alone until the next Add or Edit click.
    pub fn clear(&mut self) {
        self.title.clear();
        self.fields = FormFields::default();
    }

    /// Modal dismissed without submitting.
    pub fn discard(&mut self) {
        self.clear();
    }

    /// The request the submit button fires in the current mode.
    pub fn submission(&self) -> Submission {
        let draft = self.fields.to_draft();
        match self.mode {
            EditMode::Create => Submission::Create(draft),
            EditMode::Edit { target } => Submission::Update { id: target, draft },
        }
    }
}
