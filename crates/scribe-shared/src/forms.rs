//! Form bindings - urlencoded request payloads and their validation rules.
//!
//! Each form normalizes its text fields (trimming surrounding whitespace)
//! and returns the full list of field errors, so a re-rendered form can show
//! everything wrong at once. Validation never touches the database; the
//! handlers own the business-rule checks (duplicate email, wrong password).

use serde::Deserialize;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Registration form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();

        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();

        if self.name.is_empty() {
            errors.push("Name is required.".to_string());
        }
        if self.email.is_empty() {
            errors.push("Email is required.".to_string());
        } else if !self.email.contains('@') {
            errors.push("Email address is not valid.".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }

        errors
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();

        self.email = self.email.trim().to_string();

        if self.email.is_empty() {
            errors.push("Email is required.".to_string());
        }
        if self.password.is_empty() {
            errors.push("Password is required.".to_string());
        }

        errors
    }
}

/// Post authoring form, used for both creation and editing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub body: String,
}

impl PostForm {
    pub fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();

        self.title = self.title.trim().to_string();
        self.subtitle = self.subtitle.trim().to_string();
        self.img_url = self.img_url.trim().to_string();

        if self.title.is_empty() {
            errors.push("Title is required.".to_string());
        }
        if self.subtitle.is_empty() {
            errors.push("Subtitle is required.".to_string());
        }
        if self.img_url.is_empty() {
            errors.push("Image URL is required.".to_string());
        } else if !self.img_url.starts_with("http://") && !self.img_url.starts_with("https://") {
            errors.push("Image URL must start with http:// or https://.".to_string());
        }
        if self.body.trim().is_empty() {
            errors.push("Body is required.".to_string());
        }

        errors
    }
}

/// Comment submission form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub body: String,
}

impl CommentForm {
    pub fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.body.trim().is_empty() {
            errors.push("Comment text is required.".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_accepts_valid_input() {
        let mut form = RegisterForm {
            name: " Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            password: "long-enough".to_string(),
        };
        assert!(form.validate().is_empty());
        // Fields are trimmed in place.
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn register_form_rejects_bad_email_and_short_password() {
        let mut form = RegisterForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn register_form_requires_every_field() {
        let mut form = RegisterForm::default();
        assert_eq!(form.validate().len(), 3);
    }

    #[test]
    fn login_form_requires_email_and_password() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate().len(), 2);

        let mut form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn post_form_checks_img_url_scheme() {
        let mut form = PostForm {
            title: "Title".to_string(),
            subtitle: "Subtitle".to_string(),
            img_url: "ftp://example.com/pic.png".to_string(),
            body: "<p>text</p>".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("http"));

        form.img_url = "https://example.com/pic.png".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn comment_form_rejects_whitespace_only_body() {
        let mut form = CommentForm {
            body: "   \n".to_string(),
        };
        assert_eq!(form.validate().len(), 1);
    }
}
