//! Registration form state: current field values, the dependent dropdown
//! chain, per-field touch tracking, and the aggregate submittability
//! predicate.
//!
//! The form owns only transient UI state. Validation itself lives in
//! [`super::validation`]; this module decides *which* values get validated
//! against what, and when an error is allowed to surface.

use std::collections::HashSet;

use super::location;
use super::registration::Gender;
use super::validation::{
    self, FieldValidation, PasswordStrength, password_strength,
};

/// The tracked form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Gender,
    Country,
    State,
    City,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    /// Fields that must validate for the form to be submittable. Age and
    /// address are optional and excluded.
    pub const REQUIRED: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::Country,
        Field::State,
        Field::City,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];
}

/// Client-side form state.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    age: String,
    gender: Option<Gender>,
    address: String,
    country: String,
    state: String,
    city: String,
    password: String,
    confirm_password: String,
    terms: bool,

    /// Fields the user has interacted with; errors stay hidden for pristine
    /// fields until a full-form pass.
    touched: HashSet<Field>,

    state_options: Vec<&'static str>,
    city_options: Vec<&'static str>,
    state_enabled: bool,
    city_enabled: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    // Text inputs: value updates do not touch; the caller reports blur
    // through `touch`, matching the on-blur error timing of the form.

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
    }

    // Selects and the checkbox fire on change, which counts as interaction.

    pub fn set_gender(&mut self, value: Gender) {
        self.gender = Some(value);
        self.touched.insert(Field::Gender);
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.terms = accepted;
        self.touched.insert(Field::Terms);
    }

    /// Select a country. Clears and disables the dependent state and city
    /// selections; repopulates the state options when the country resolves in
    /// the location table. An unknown or empty country is not an error here,
    /// it just leaves the dependents cleared.
    pub fn set_country(&mut self, value: impl Into<String>) {
        self.country = value.into();
        self.touched.insert(Field::Country);

        self.state.clear();
        self.city.clear();
        self.state_options.clear();
        self.city_options.clear();
        self.state_enabled = false;
        self.city_enabled = false;

        if let Some(states) = location::states(&self.country) {
            self.state_options = states;
            self.state_enabled = true;
        }
    }

    /// Select a state. Clears and disables the city selection; repopulates
    /// city options when (country, state) resolves in the location table.
    pub fn set_state(&mut self, value: impl Into<String>) {
        self.state = value.into();
        self.touched.insert(Field::State);

        self.city.clear();
        self.city_options.clear();
        self.city_enabled = false;

        if let Some(cities) = location::cities(&self.country, &self.state) {
            self.city_options = cities;
            self.city_enabled = true;
        }
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
        self.touched.insert(Field::City);
    }

    /// Record that a field received and lost focus.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    // Dropdown state exposed to the UI layer.

    pub fn state_options(&self) -> &[&'static str] {
        &self.state_options
    }

    pub fn city_options(&self) -> &[&'static str] {
        &self.city_options
    }

    pub fn state_enabled(&self) -> bool {
        self.state_enabled
    }

    pub fn city_enabled(&self) -> bool {
        self.city_enabled
    }

    pub fn selected_state(&self) -> &str {
        &self.state
    }

    pub fn selected_city(&self) -> &str {
        &self.city
    }

    /// Evaluate a single field against the current values. Touch state does
    /// not affect validity.
    pub fn validate_field(&self, field: Field) -> FieldValidation {
        match field {
            Field::FirstName => validation::validate_first_name(&self.first_name),
            Field::LastName => validation::validate_last_name(&self.last_name),
            Field::Email => validation::validate_email(&self.email),
            Field::Phone => {
                let country = (!self.country.is_empty()).then_some(self.country.as_str());
                validation::validate_phone(&self.phone, country)
            }
            Field::Age => validation::validate_age(&self.age),
            Field::Gender => validation::validate_gender(self.gender),
            Field::Country => validation::validate_country(&self.country),
            Field::State => validation::validate_state(&self.state, &self.country),
            Field::City => validation::validate_city(&self.city, &self.country, &self.state),
            Field::Password => validation::validate_password(&self.password),
            Field::ConfirmPassword => {
                validation::validate_confirm_password(&self.confirm_password, &self.password)
            }
            Field::Terms => validation::validate_terms(self.terms),
        }
    }

    /// Error message to display next to a field, or `None` while the field is
    /// pristine or valid.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        let result = self.validate_field(field);
        (!result.valid).then_some(result.message)
    }

    /// The aggregate form predicate: true iff every required field currently
    /// validates. Recomputed from the live values on every call; never
    /// cached.
    pub fn is_submittable(&self) -> bool {
        Field::REQUIRED
            .iter()
            .all(|field| self.validate_field(*field).valid)
    }

    /// Full-form validation pass, as triggered by a submit attempt. Marks
    /// every required field as touched and returns the failures in field
    /// order for the consolidated error banner.
    pub fn validate_all(&mut self) -> Vec<(Field, String)> {
        let mut failures = Vec::new();

        for field in Field::REQUIRED {
            self.touched.insert(field);
            let result = self.validate_field(field);
            if !result.valid {
                failures.push((field, result.message));
            }
        }

        failures
    }

    /// Strength band of the current password, for the strength meter.
    pub fn password_strength(&self) -> PasswordStrength {
        password_strength(&self.password)
    }
}
