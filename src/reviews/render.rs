use yew::prelude::*;

use crate::reviews::board::ListView;
use crate::reviews::models::{Category, ExampleReview, Review};

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewListProps {
    pub category: Category,
    pub view: ListView,
}

#[function_component(ReviewList)]
pub fn review_list(props: &ReviewListProps) -> Html {
    if props.view.is_empty() {
        return html! {
            <div class="list-empty-state">
                <p>{ props.category.empty_message() }</p>
            </div>
        };
    }

    match &props.view {
        ListView::Reviews(reviews) => html! {
            <>
                { for reviews.iter().map(|review| html! { <ReviewItem review={review.clone()} /> }) }
            </>
        },
        ListView::Examples(examples) => html! {
            <>
                { for examples.iter().map(|example| html! { <ExampleItem example={example.clone()} /> }) }
            </>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewItemProps {
    pub review: Review,
}

#[function_component(ReviewItem)]
pub fn review_item(props: &ReviewItemProps) -> Html {
    let review = &props.review;
    html! {
        <div class="list-item">
            <h4>{ &review.establishment_name }</h4>
            <p><strong>{"Endereço:"}</strong>{" "}{ &review.address }</p>
            <p><strong>{"Avaliação:"}</strong>{" "}{ review.stars() }</p>
            <p>{ &review.review_text }</p>
            <p class="review-author">{"Por: "}{ &review.reviewer_name }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ExampleItemProps {
    pub example: ExampleReview,
}

#[function_component(ExampleItem)]
pub fn example_item(props: &ExampleItemProps) -> Html {
    let example = &props.example;
    html! {
        <div class="list-item">
            <h4>{ example.name }</h4>
            <p><strong>{"Endereço:"}</strong>{" "}{ example.address }</p>
            <p>{ example.description }</p>
        </div>
    }
}
