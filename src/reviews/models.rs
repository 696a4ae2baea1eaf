use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_RATING: i32 = 5;
pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Positive, Category::Negative];

    pub fn query_value(self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Category::Positive => "positive-list",
            Category::Negative => "negative-list",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Category::Positive => {
                "Ainda não temos avaliações positivas. Seja o primeiro a contribuir!"
            }
            Category::Negative => "Ainda não temos avaliações negativas. Ótima notícia!",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Positive => 0,
            Category::Negative => 1,
        }
    }
}

/// An approved review as served by `/api/reviews`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    pub establishment_name: String,
    pub address: String,
    #[serde(default)]
    pub rating: i32,
    pub review_text: String,
    pub reviewer_name: String,
    #[serde(default)]
    pub is_positive: Option<bool>,
}

impl Review {
    pub fn stars(&self) -> String {
        star_line(self.rating)
    }
}

/// `rating` filled stars followed by empty ones, five glyphs in total.
/// Out-of-range ratings are clamped.
pub fn star_line(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let mut line = String::with_capacity(MAX_RATING as usize * FILLED_STAR.len_utf8());
    line.extend(std::iter::repeat(FILLED_STAR).take(filled));
    line.extend(std::iter::repeat(EMPTY_STAR).take(MAX_RATING as usize - filled));
    line
}

/// Hard-coded entry shown while no real reviews are available.
#[derive(Clone, Debug, PartialEq)]
pub struct ExampleReview {
    pub name: &'static str,
    pub address: &'static str,
    pub description: &'static str,
}

pub const POSITIVE_EXAMPLES: [ExampleReview; 2] = [
    ExampleReview {
        name: "Café Acessível",
        address: "Rua das Flores, 123 - Centro",
        description: "Atendimento excepcional, oferece cardápio em braile e funcionários treinados para atender PCDs com respeito e atenção.",
    },
    ExampleReview {
        name: "Restaurante Inclusivo",
        address: "Av. Central, 456 - Jardins",
        description: "Ambiente totalmente acessível, com rampas adequadas, mesas adaptadas e banheiros preparados para cadeirantes.",
    },
];

pub fn examples(category: Category) -> &'static [ExampleReview] {
    match category {
        Category::Positive => &POSITIVE_EXAMPLES,
        Category::Negative => &[],
    }
}

/// Body of `POST /api/reviews`. New reviews wait for moderation server-side.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub establishment_name: String,
    pub address: String,
    pub review_text: String,
    pub rating: u8,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub is_positive: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidSubmission {
    #[error("Preencha o campo {0}.")]
    Blank(&'static str),
    #[error("Informe um e-mail válido.")]
    Email,
    #[error("A avaliação deve ser de 1 a 5 estrelas.")]
    Rating,
}

/// What the form holds while the visitor types.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewDraft {
    pub establishment_name: String,
    pub address: String,
    pub review_text: String,
    pub rating: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub is_positive: bool,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            establishment_name: String::new(),
            address: String::new(),
            review_text: String::new(),
            rating: MAX_RATING.to_string(),
            reviewer_name: String::new(),
            reviewer_email: String::new(),
            is_positive: true,
        }
    }
}

impl ReviewDraft {
    pub fn to_submission(&self) -> Result<ReviewSubmission, InvalidSubmission> {
        let required = |value: &str, field: &'static str| {
            let value = value.trim();
            if value.is_empty() {
                Err(InvalidSubmission::Blank(field))
            } else {
                Ok(value.to_string())
            }
        };

        let establishment_name = required(&self.establishment_name, "estabelecimento")?;
        let address = required(&self.address, "endereço")?;
        let review_text = required(&self.review_text, "avaliação")?;
        let reviewer_name = required(&self.reviewer_name, "nome")?;
        let reviewer_email = required(&self.reviewer_email, "e-mail")?;
        if !valid_email(&reviewer_email) {
            return Err(InvalidSubmission::Email);
        }
        let rating = match self.rating.trim().parse::<u8>() {
            Ok(r) if (1..=MAX_RATING as u8).contains(&r) => r,
            _ => return Err(InvalidSubmission::Rating),
        };

        Ok(ReviewSubmission {
            establishment_name,
            address,
            review_text,
            rating,
            reviewer_name,
            reviewer_email,
            is_positive: self.is_positive,
        })
    }
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_for_every_rating() {
        assert_eq!(star_line(0), "☆☆☆☆☆");
        assert_eq!(star_line(3), "★★★☆☆");
        assert_eq!(star_line(5), "★★★★★");
    }

    #[test]
    fn stars_clamp_out_of_range() {
        assert_eq!(star_line(-2), "☆☆☆☆☆");
        assert_eq!(star_line(9), "★★★★★");
    }

    #[test]
    fn decodes_service_payload() {
        let body = r#"[{"id": 7, "establishmentName": "Padaria Sol", "address": "Rua A, 1",
            "reviewText": "Rampa na entrada", "rating": 4, "reviewerName": "Ana", "isPositive": true}]"#;
        let reviews: Vec<Review> = serde_json::from_str(body).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, Some(7));
        assert_eq!(reviews[0].establishment_name, "Padaria Sol");
        assert_eq!(reviews[0].is_positive, Some(true));
        assert_eq!(reviews[0].stars(), "★★★★☆");
    }

    #[test]
    fn decodes_minimal_review() {
        let body = r#"{"establishmentName": "X", "address": "Y", "rating": 2,
            "reviewText": "Z", "reviewerName": "W"}"#;
        let review: Review = serde_json::from_str(body).unwrap();
        assert_eq!(review.id, None);
        assert_eq!(review.is_positive, None);
    }

    #[test]
    fn fallback_examples() {
        assert_eq!(examples(Category::Positive).len(), 2);
        assert!(examples(Category::Negative).is_empty());
    }

    #[test]
    fn category_wiring() {
        assert_eq!(Category::Positive.container_id(), "positive-list");
        assert_eq!(Category::Negative.query_value(), "negative");
        assert_ne!(Category::Positive.index(), Category::Negative.index());
    }

    fn filled_draft() -> ReviewDraft {
        ReviewDraft {
            establishment_name: "  Padaria Sol ".to_string(),
            address: "Rua A, 1".to_string(),
            review_text: "Banheiro adaptado".to_string(),
            rating: "4".to_string(),
            reviewer_name: "Ana".to_string(),
            reviewer_email: "ana@example.com".to_string(),
            is_positive: false,
        }
    }

    #[test]
    fn draft_becomes_trimmed_submission() {
        let submission = filled_draft().to_submission().unwrap();
        assert_eq!(submission.establishment_name, "Padaria Sol");
        assert_eq!(submission.rating, 4);
        assert!(!submission.is_positive);

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["establishmentName"], "Padaria Sol");
        assert_eq!(json["reviewerEmail"], "ana@example.com");
        assert_eq!(json["isPositive"], false);
    }

    #[test]
    fn draft_rejects_blank_fields() {
        let mut draft = filled_draft();
        draft.address = "   ".to_string();
        assert_eq!(draft.to_submission(), Err(InvalidSubmission::Blank("endereço")));
    }

    #[test]
    fn draft_rejects_bad_email() {
        let mut draft = filled_draft();
        draft.reviewer_email = "ana.example.com".to_string();
        assert_eq!(draft.to_submission(), Err(InvalidSubmission::Email));
        draft.reviewer_email = "@example.com".to_string();
        assert_eq!(draft.to_submission(), Err(InvalidSubmission::Email));
    }

    #[test]
    fn draft_rejects_rating_out_of_range() {
        let mut draft = filled_draft();
        for rating in ["0", "6", "abc", ""] {
            draft.rating = rating.to_string();
            assert_eq!(draft.to_submission(), Err(InvalidSubmission::Rating));
        }
    }

    #[test]
    fn submit_response_without_message() {
        let response: SubmitResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.message.is_empty());
    }
}
