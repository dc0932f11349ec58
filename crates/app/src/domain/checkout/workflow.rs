//! Checkout workflow.

use std::time::Duration;

use crate::domain::{
    cart::store::CartStore,
    checkout::{errors::CheckoutError, models::CheckoutForm, validation::validate},
};

/// Simulated payment-processing time.
const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Where a checkout session currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// The form is being edited.
    #[default]
    Editing,
    /// A valid submission is being processed.
    Processing,
    /// The simulated order went through. Terminal for this session.
    Completed,
}

/// Simulated order placement over a cart.
///
/// `Editing → Processing` on a valid submit, `Processing → Completed` after
/// the simulated processing delay clears the cart. Completion is session
/// state only: no order record is created anywhere.
#[derive(Debug)]
pub struct CheckoutWorkflow {
    state: CheckoutState,
    processing_delay: Duration,
}

impl Default for CheckoutWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutWorkflow {
    /// Create a workflow in the editing state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Editing,
            processing_delay: PROCESSING_DELAY,
        }
    }

    /// Override the simulated processing delay.
    #[must_use]
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Submit the form for the given cart.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadySubmitted`]: the workflow left editing.
    /// - [`CheckoutError::EmptyCart`]: there is nothing to check out.
    /// - [`CheckoutError::Invalid`]: one or more fields failed validation.
    pub fn submit(&mut self, form: &CheckoutForm, cart: &CartStore) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Editing {
            return Err(CheckoutError::AlreadySubmitted);
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let errors = validate(form);
        if !errors.is_empty() {
            return Err(CheckoutError::Invalid(errors));
        }

        self.state = CheckoutState::Processing;

        Ok(())
    }

    /// Finish a submitted checkout: wait out the simulated processing
    /// delay, clear the cart, and complete.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::NotProcessing`]: nothing was submitted.
    pub async fn process(&mut self, cart: &mut CartStore) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Processing {
            return Err(CheckoutError::NotProcessing);
        }

        tokio::time::sleep(self.processing_delay).await;

        cart.clear();
        self.state = CheckoutState::Completed;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::{
        storage::Storage,
        test::{self, RecordingNotifier},
    };

    use super::*;

    fn cart_with_items(dir: &TempDir) -> CartStore {
        let mut cart = CartStore::load(Storage::new(dir.path()), RecordingNotifier::new());
        cart.add_item(&test::product(1, "Enamel Mug", 10_00, "home", 4.1), 2);
        cart
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            zip: "N1 9GU".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[tokio::test]
    async fn valid_submission_runs_to_completion_and_clears_the_cart() -> TestResult {
        let dir = TempDir::new()?;
        let mut cart = cart_with_items(&dir);
        let mut workflow = CheckoutWorkflow::new().with_processing_delay(Duration::ZERO);

        assert_eq!(workflow.state(), CheckoutState::Editing);

        workflow.submit(&valid_form(), &cart)?;
        assert_eq!(workflow.state(), CheckoutState::Processing);

        workflow.process(&mut cart).await?;
        assert_eq!(workflow.state(), CheckoutState::Completed);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn empty_cart_blocks_submission_before_validation() -> TestResult {
        let dir = TempDir::new()?;
        let cart = CartStore::load(Storage::new(dir.path()), RecordingNotifier::new());
        let mut workflow = CheckoutWorkflow::new();

        // The form is empty too; the empty cart must win.
        let result = workflow.submit(&CheckoutForm::default(), &cart);

        assert_eq!(result, Err(CheckoutError::EmptyCart));
        assert_eq!(workflow.state(), CheckoutState::Editing);

        Ok(())
    }

    #[test]
    fn invalid_form_keeps_the_workflow_editing() -> TestResult {
        let dir = TempDir::new()?;
        let cart = cart_with_items(&dir);
        let mut workflow = CheckoutWorkflow::new();

        let form = CheckoutForm {
            email: "nope".to_string(),
            ..valid_form()
        };

        let result = workflow.submit(&form, &cart);

        assert!(
            matches!(result, Err(CheckoutError::Invalid(ref errors)) if errors.len() == 1),
            "expected a single validation error, got {result:?}"
        );
        assert_eq!(workflow.state(), CheckoutState::Editing);

        Ok(())
    }

    #[tokio::test]
    async fn processing_without_a_submission_is_rejected() -> TestResult {
        let dir = TempDir::new()?;
        let mut cart = cart_with_items(&dir);
        let mut workflow = CheckoutWorkflow::new().with_processing_delay(Duration::ZERO);

        let result = workflow.process(&mut cart).await;

        assert_eq!(result, Err(CheckoutError::NotProcessing));
        assert!(!cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn completed_checkout_cannot_be_resubmitted() -> TestResult {
        let dir = TempDir::new()?;
        let mut cart = cart_with_items(&dir);
        let mut workflow = CheckoutWorkflow::new().with_processing_delay(Duration::ZERO);

        workflow.submit(&valid_form(), &cart)?;
        workflow.process(&mut cart).await?;

        let result = workflow.submit(&valid_form(), &cart);

        assert_eq!(result, Err(CheckoutError::AlreadySubmitted));
        assert_eq!(workflow.state(), CheckoutState::Completed);

        Ok(())
    }
}
