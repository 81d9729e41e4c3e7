// src/workflow.rs

//! Ingredient list/create/edit/delete operations
//!
//! Each operation runs to completion against the injected store and returns
//! what the boundary should do next: show a form, or go back to the list
//! with a notification. Validation failures and unknown ids are outcomes,
//! not errors; only storage failures come back as `Err`.
//!
//! Form operations move through `FormShown -> (Submitted & invalid ->
//! FormShown) | (Submitted & valid -> Persisted -> RedirectedToList)`.
//! Delete has no form: `Resolved | NotFound -> Deleted | Skipped ->
//! RedirectedToList`.

use crate::db::models::Ingredient;
use crate::error::{Error, Result};
use crate::form::{IngredientForm, Payload, Violation};
use crate::notification::Notification;
use crate::pagination::{DEFAULT_PAGE_SIZE, Page, paginate};
use crate::store::IngredientStore;
use tracing::{debug, info, warn};

/// State of a form that is (re)displayed
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// The record with any submitted values bound, not persisted
    pub ingredient: Ingredient,
    pub submitted: bool,
    pub violations: Vec<Violation>,
}

impl FormState {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// What the caller should do after an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Render the form, with violations when a submission was rejected
    ShowForm(FormState),
    /// Go back to the list and surface the notification there
    RedirectToList(Notification),
}

/// Ingredient operations over an injected store
pub struct IngredientWorkflow<'s, S: IngredientStore + ?Sized> {
    store: &'s mut S,
    form: IngredientForm,
    page_size: usize,
}

impl<'s, S: IngredientStore + ?Sized> IngredientWorkflow<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            form: IngredientForm::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// One page of every stored ingredient; page defaults to 1
    pub fn list(&self, page: Option<i64>) -> Result<Page<Ingredient>> {
        let all = self.store.find_all()?;
        let page = paginate(&all, page.unwrap_or(1), self.page_size);
        debug!(
            "Listing page {}/{} ({} ingredients)",
            page.current_page, page.total_pages, page.total_count
        );
        Ok(page)
    }

    /// Show an empty form, or persist a valid submission
    pub fn create(&mut self, submission: Option<&Payload>) -> Result<Outcome> {
        let ingredient = Ingredient::new();
        let Some(payload) = submission else {
            return Ok(Outcome::ShowForm(FormState {
                ingredient,
                submitted: false,
                violations: Vec::new(),
            }));
        };

        match self.submit(payload, ingredient) {
            Ok(saved) => {
                info!("Created ingredient {:?}", saved.id());
                Ok(Outcome::RedirectToList(Notification::created()))
            }
            Err(SubmitError::Invalid(state)) => Ok(Outcome::ShowForm(state)),
            Err(SubmitError::Store(e)) => Err(e),
        }
    }

    /// Show the form for an existing ingredient, or persist a valid submission
    ///
    /// An unknown id sends the user back to the list with an error notice.
    pub fn edit(&mut self, id: i64, submission: Option<&Payload>) -> Result<Outcome> {
        let Some(ingredient) = self.store.find_by_id(id)? else {
            warn!("Edit requested for unknown ingredient {}", id);
            return Ok(Outcome::RedirectToList(Notification::not_found()));
        };

        let Some(payload) = submission else {
            return Ok(Outcome::ShowForm(FormState {
                ingredient,
                submitted: false,
                violations: Vec::new(),
            }));
        };

        match self.submit(payload, ingredient) {
            Ok(_) => {
                info!("Updated ingredient {}", id);
                Ok(Outcome::RedirectToList(Notification::updated()))
            }
            Err(SubmitError::Invalid(state)) => Ok(Outcome::ShowForm(state)),
            // Deleted between the lookup and the write
            Err(SubmitError::Store(Error::NotFoundError(_))) => {
                warn!("Ingredient {} disappeared before it could be updated", id);
                Ok(Outcome::RedirectToList(Notification::not_found()))
            }
            Err(SubmitError::Store(e)) => Err(e),
        }
    }

    /// Delete an ingredient if it exists; always ends on the list
    pub fn delete(&mut self, id: i64) -> Result<Outcome> {
        let Some(ingredient) = self.store.find_by_id(id)? else {
            warn!("Delete requested for unknown ingredient {}", id);
            return Ok(Outcome::RedirectToList(Notification::not_found()));
        };

        if self.store.delete(&ingredient)? {
            info!("Deleted ingredient {}", id);
            Ok(Outcome::RedirectToList(Notification::deleted()))
        } else {
            warn!("Ingredient {} was already gone at delete time", id);
            Ok(Outcome::RedirectToList(Notification::not_found()))
        }
    }

    fn submit(
        &mut self,
        payload: &Payload,
        mut ingredient: Ingredient,
    ) -> std::result::Result<Ingredient, SubmitError> {
        let violations = self.form.submit(payload, &mut ingredient);
        if !violations.is_empty() {
            let failed: Vec<String> = violations
                .iter()
                .map(|v| format!("{}:{}", v.field, v.rule))
                .collect();
            debug!("Rejected ingredient submission: {}", failed.join(", "));
            return Err(SubmitError::Invalid(FormState {
                ingredient,
                submitted: true,
                violations,
            }));
        }

        self.store.save(&mut ingredient).map_err(SubmitError::Store)?;
        Ok(ingredient)
    }
}

enum SubmitError {
    Invalid(FormState),
    Store(Error),
}
