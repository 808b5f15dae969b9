use contracts::domain::a001_teacher_position::aggregate::TeacherPosition;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::Tag;

/// Display projection of a position card
#[derive(Clone, Debug, PartialEq)]
pub struct PositionCardView {
    pub id: String,
    pub initials: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl From<&TeacherPosition> for PositionCardView {
    fn from(p: &TeacherPosition) -> Self {
        let initials: String = p.code.chars().take(2).collect();
        Self {
            id: p.id.as_string(),
            initials: if initials.is_empty() {
                "CV".to_string()
            } else {
                initials
            },
            name: p.name.clone(),
            code: p.code.clone(),
            description: p.description.clone().unwrap_or_default(),
            is_active: p.is_active,
            is_deleted: p.is_deleted,
        }
    }
}

#[component]
pub fn PositionCard(card: PositionCardView) -> impl IntoView {
    let (active_color, active_label) = if card.is_active {
        ("green", "Đang hoạt động")
    } else {
        ("red", "Ngừng hoạt động")
    };
    let (deleted_color, deleted_label) = if card.is_deleted {
        ("volcano", "Đã xóa")
    } else {
        ("blue", "Chưa xóa")
    };

    view! {
        <Card class="position-card">
            <div class="position-card__body">
                <div class="position-card__avatar">{card.initials}</div>
                <div class="position-card__content">
                    <h3 class="position-card__name">{card.name}</h3>
                    <Tag color="purple">{card.code}</Tag>
                    <p class="position-card__description">{card.description}</p>
                    <div class="position-card__tags">
                        <Tag color=active_color>{active_label}</Tag>
                        <Tag color=deleted_color>{deleted_label}</Tag>
                    </div>
                </div>
            </div>
        </Card>
    }
}

/// Grid of position cards, or an empty state
#[component]
pub fn PositionGrid(#[prop(into)] positions: Signal<Vec<TeacherPosition>>) -> impl IntoView {
    view! {
        {move || {
            let cards: Vec<PositionCardView> =
                positions.with(|items| items.iter().map(Into::into).collect());
            if cards.is_empty() {
                view! { <div class="empty-state">"Không có dữ liệu chức vụ"</div> }.into_any()
            } else {
                view! {
                    <div class="card-grid card-grid--3">
                        {cards
                            .into_iter()
                            .map(|card| view! { <PositionCard card=card /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}
