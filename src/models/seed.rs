use super::document::*;

/// The sample strategy every new session starts from.
///
/// Market size and the ABC analysis are left blank so a fresh wizard shows
/// work still to do.
pub fn seed_document() -> StrategyDocument {
    StrategyDocument {
        project_name: "Моя новая маркетинговая стратегия".into(),
        intro: Intro {
            mission: "Дать возможность каждому питаться правильно и вкусно.".into(),
            vision: "Стать брендом №1 в категории полезных снеков к 2025 году.".into(),
            smart_goal: "Увеличить оборот до 500 млн руб. к концу 2024 года.".into(),
        },
        external: ExternalAudit {
            pest: Pest {
                political: "Стабильное регулирование пищевой отрасли.".into(),
                economic: "Снижение реальных доходов населения на 3%.".into(),
                social: "Рост тренда на ЗОЖ и правильное питание.".into(),
                tech: "Развитие e-commerce и экспресс-доставки.".into(),
            },
            market_size: String::new(),
            competitors: vec![
                competitor("Fit&Fruit", "12%", "Цена", "Состав"),
                competitor("R.A.W. Life", "8%", "Премиальный имидж", "Высокая цена"),
            ],
        },
        internal: InternalAudit {
            audit_4p: FourP {
                product: "100% натуральный состав, без сахара.".into(),
                price: "Средний плюс, стратегия 'снятия сливок'.".into(),
                place: "Федеральные сети (X5, Магнит), маркетплейсы.".into(),
                promotion: "SMM, работа с блогерами, дегустации.".into(),
            },
            abc_analysis: String::new(),
        },
        swot: Swot {
            strengths: strings(&["Собственное производство", "Уникальная рецептура"]),
            weaknesses: strings(&[
                "Низкая узнаваемость в регионах",
                "Зависимость от импортного сырья",
            ]),
            opportunities: strings(&["Выход на рынок СНГ", "Запуск протеиновой линейки"]),
            threats: strings(&["Рост цен на логистику", "Демпинг конкурентов"]),
        },
        strategy: StrategyChoice {
            ansoff: super::AnsoffDirection::ProductDevelopment.label().into(),
            target_audience:
                "Женщины и мужчины 25-45 лет, доход средний+, ЗОЖ-ориентированные.".into(),
            positioning: "Полезный перекус для активных горожан.".into(),
        },
        action_plan: vec![
            action(
                "Запуск рекламной кампании в соцсетях",
                "Март 2024",
                "Маркетолог",
                "500 000 руб.",
            ),
            action(
                "Листинг в сеть 'Азбука Вкуса'",
                "Май 2024",
                "КАМ",
                "200 000 руб.",
            ),
        ],
    }
}

fn competitor(name: &str, share: &str, strength: &str, weakness: &str) -> Competitor {
    Competitor {
        name: name.into(),
        share: share.into(),
        strength: strength.into(),
        weakness: weakness.into(),
    }
}

fn action(activity: &str, deadline: &str, owner: &str, budget: &str) -> ActionItem {
    ActionItem {
        activity: activity.into(),
        deadline: deadline.into(),
        owner: owner.into(),
        budget: budget.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
