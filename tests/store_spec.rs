use speculate2::speculate;
use strategio::models::*;
use strategio::store::*;

/// A document with every counted leaf empty. The project name and action
/// plan are left filled to show they do not count.
fn cleared_document() -> StrategyDocument {
    StrategyDocument {
        project_name: "Still named".to_string(),
        action_plan: seed_document().action_plan,
        ..Default::default()
    }
}

fn filled(text: &str) -> String {
    text.to_string()
}

fn complete_document() -> StrategyDocument {
    StrategyDocument {
        project_name: String::new(),
        intro: Intro {
            mission: filled("m"),
            vision: filled("v"),
            smart_goal: filled("g"),
        },
        external: ExternalAudit {
            pest: Pest {
                political: filled("p"),
                economic: filled("e"),
                social: filled("s"),
                tech: filled("t"),
            },
            market_size: filled("4 млрд"),
            competitors: vec![Competitor::default()],
        },
        internal: InternalAudit {
            audit_4p: FourP {
                product: filled("product"),
                price: filled("price"),
                place: filled("place"),
                promotion: filled("promotion"),
            },
            abc_analysis: filled("A"),
        },
        swot: Swot {
            strengths: vec![filled("s")],
            weaknesses: vec![filled("w")],
            opportunities: vec![filled("o")],
            threats: vec![filled("t")],
        },
        strategy: StrategyChoice {
            ansoff: AnsoffDirection::Diversification.label().to_string(),
            target_audience: filled("25-45"),
            positioning: filled("Полезный перекус"),
        },
        action_plan: Vec::new(),
    }
}

speculate! {
    before {
        let mut store = Store::seeded();
    }

    describe "set_current_section" {
        it "returns the new section on the next read" {
            store.set_current_section(SectionId::Swot);
            assert_eq!(store.current_section(), SectionId::Swot);
        }

        it "does not depend on document content" {
            let mut empty = Store::new(StrategyDocument::default());
            empty.set_current_section(SectionId::Swot);
            assert_eq!(empty.current_section(), SectionId::Swot);
        }

        it "can select every section" {
            for id in SectionId::ALL {
                store.set_current_section(id);
                assert_eq!(store.current_section(), id);
            }
        }
    }

    describe "patch_document" {
        it "leaves keys outside the patch untouched" {
            let before = store.document().clone();

            store.patch_document(DocumentPatch {
                project_name: Some("Другой проект".to_string()),
                ..Default::default()
            });

            let after = store.document();
            assert_eq!(after.project_name, "Другой проект");
            assert_eq!(after.intro, before.intro);
            assert_eq!(after.external, before.external);
            assert_eq!(after.internal, before.internal);
            assert_eq!(after.swot, before.swot);
            assert_eq!(after.strategy, before.strategy);
            assert_eq!(after.action_plan, before.action_plan);
        }

        it "replaces a whole section without merging" {
            store.patch_document(DocumentPatch {
                intro: Some(Intro {
                    mission: "Only mission".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            });

            assert_eq!(store.document().intro.mission, "Only mission");
            assert_eq!(store.document().intro.vision, "");
        }
    }

    describe "patch_section" {
        it "leaves every other section unchanged" {
            let before = store.document().clone();

            let patches = vec![
                SectionPatch::Intro(IntroPatch { mission: Some("x".into()), ..Default::default() }),
                SectionPatch::External(ExternalPatch { market_size: Some("x".into()), ..Default::default() }),
                SectionPatch::Internal(InternalPatch { abc_analysis: Some("x".into()), ..Default::default() }),
                SectionPatch::Swot(SwotPatch { threats: Some(vec![]), ..Default::default() }),
                SectionPatch::Strategy(StrategyPatch { positioning: Some("x".into()), ..Default::default() }),
                SectionPatch::ActionPlan(vec![]),
            ];

            for patch in patches {
                let section = patch.section();
                let mut patched = Store::new(before.clone());
                patched.patch_section(patch);
                let after = patched.document();

                assert_eq!(after.project_name, before.project_name);
                for other in SectionId::ALL.into_iter().filter(|id| *id != section) {
                    assert_eq!(after.section(other), before.section(other), "{} changed", other);
                }
            }
        }

        it "replaces only the given swot quadrant" {
            let before = store.document().swot.clone();

            store.patch_section(SectionPatch::Swot(SwotPatch {
                strengths: Some(vec!["Новая сила".to_string()]),
                ..Default::default()
            }));

            let swot = &store.document().swot;
            assert_eq!(swot.strengths, vec!["Новая сила".to_string()]);
            assert_eq!(swot.weaknesses, before.weaknesses);
            assert_eq!(swot.opportunities, before.opportunities);
            assert_eq!(swot.threats, before.threats);
        }

        it "replaces a nested record wholesale" {
            store.patch_section(SectionPatch::External(ExternalPatch {
                pest: Some(Pest { political: "x".to_string(), ..Default::default() }),
                ..Default::default()
            }));

            let pest = &store.document().external.pest;
            assert_eq!(pest.political, "x");
            assert_eq!(pest.economic, "");
            assert_eq!(pest.social, "");
            assert_eq!(pest.tech, "");
        }

        it "keeps sibling fields of the section" {
            let competitors = store.document().external.competitors.clone();

            store.patch_section(SectionPatch::External(ExternalPatch {
                market_size: Some("5 млрд".to_string()),
                ..Default::default()
            }));

            assert_eq!(store.document().external.market_size, "5 млрд");
            assert_eq!(store.document().external.competitors, competitors);
        }
    }

    describe "progress" {
        it "is strictly between 0 and 100 for the seed" {
            let progress = store.progress();
            assert!(progress > 0 && progress < 100, "seed progress was {}", progress);
            assert_eq!(progress, 90);
        }

        it "drops to 0 when every counted field is cleared" {
            let store = Store::new(cleared_document());
            assert_eq!(store.progress(), 0);
        }

        it "reaches 100 when every counted leaf is filled" {
            let store = Store::new(complete_document());
            assert_eq!(store.progress(), 100);
        }

        it "is unchanged by a no-op patch" {
            let before = store.progress();
            let intro = store.document().intro.clone();

            store.patch_section(SectionPatch::Intro(IntroPatch {
                mission: Some(intro.mission),
                vision: Some(intro.vision),
                smart_goal: Some(intro.smart_goal),
            }));

            assert_eq!(store.progress(), before);
        }

        it "loses exactly one filled field when the mission is cleared" {
            let before = store.progress_report();
            assert!(!store.document().intro.mission.is_empty());

            store.patch_section(SectionPatch::Intro(IntroPatch {
                mission: Some(String::new()),
                ..Default::default()
            }));

            let after = store.progress_report();
            assert_eq!(after.filled, before.filled - 1);
            assert_eq!(after.total, before.total);
            assert!(after.percent <= before.percent);
        }

        it "ignores a new action plan row" {
            let before = store.progress();
            let mut rows = store.document().action_plan.clone();
            rows.push(ActionItem {
                activity: "Дегустации в магазинах".to_string(),
                ..Default::default()
            });

            store.patch_section(SectionPatch::ActionPlan(rows));

            assert_eq!(store.document().action_plan.len(), 3);
            assert_eq!(store.progress(), before);
        }

        it "ignores the project name" {
            let before = store.progress();
            store.patch_document(DocumentPatch {
                project_name: Some(String::new()),
                ..Default::default()
            });
            assert_eq!(store.progress(), before);
        }

        it "treats whitespace as empty" {
            store.patch_section(SectionPatch::Intro(IntroPatch {
                vision: Some("   ".to_string()),
                ..Default::default()
            }));
            assert_eq!(store.progress_report().filled, 18);
        }
    }

    describe "edits" {
        it "removes a competitor and keeps the others in order" {
            store.apply_edit(Edit::AddCompetitor).expect("add failed");
            store.apply_edit(Edit::UpdateCompetitor {
                index: 2,
                field: CompetitorField::Name,
                value: "Snack Lab".to_string(),
            }).expect("update failed");
            let before = store.document().external.competitors.clone();
            assert_eq!(before.len(), 3);

            store.apply_edit(Edit::RemoveCompetitor { index: 1 }).expect("remove failed");

            let after = &store.document().external.competitors;
            assert_eq!(after.len(), 2);
            assert_eq!(after[0], before[0]);
            assert_eq!(after[1], before[2]);
        }

        it "changes one pest factor and keeps the rest" {
            let before = store.document().external.pest.clone();

            let section = store.apply_edit(Edit::SetPestField {
                field: PestField::Economic,
                value: "Рост доходов".to_string(),
            }).expect("edit failed");

            let pest = &store.document().external.pest;
            assert_eq!(section, SectionId::External);
            assert_eq!(pest.economic, "Рост доходов");
            assert_eq!(pest.political, before.political);
            assert_eq!(pest.tech, before.tech);
        }

        it "changes one 4P field and keeps the rest" {
            store.apply_edit(Edit::SetFourPField {
                field: FourPField::Price,
                value: "Премиум".to_string(),
            }).expect("edit failed");

            let audit = &store.document().internal.audit_4p;
            assert_eq!(audit.price, "Премиум");
            assert_eq!(audit.product, seed_document().internal.audit_4p.product);
        }

        it "adds, updates and removes swot items" {
            store.apply_edit(Edit::AddSwotItem { quadrant: SwotQuadrant::Opportunities }).expect("add failed");
            store.apply_edit(Edit::UpdateSwotItem {
                quadrant: SwotQuadrant::Opportunities,
                index: 2,
                value: "Экспорт".to_string(),
            }).expect("update failed");
            store.apply_edit(Edit::RemoveSwotItem {
                quadrant: SwotQuadrant::Opportunities,
                index: 0,
            }).expect("remove failed");

            assert_eq!(
                store.document().swot.opportunities,
                vec!["Запуск протеиновой линейки".to_string(), "Экспорт".to_string()]
            );
        }

        it "edits action plan rows by position" {
            store.apply_edit(Edit::AddAction).expect("add failed");
            store.apply_edit(Edit::UpdateAction {
                index: 2,
                field: ActionField::Budget,
                value: "100 000 руб.".to_string(),
            }).expect("update failed");

            let rows = &store.document().action_plan;
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[2].budget, "100 000 руб.");
            assert_eq!(rows[2].activity, "");
        }

        it "rejects an index past the end and keeps the document" {
            let before = store.document().clone();

            let result = store.apply_edit(Edit::RemoveAction { index: 7 });

            assert!(matches!(result, Err(StoreError::IndexOutOfRange { index: 7, len: 2, .. })));
            assert_eq!(store.document(), &before);
        }
    }
}
