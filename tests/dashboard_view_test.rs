//! End-to-end tests: dataset through filter, chart selection and figures

mod common;

use std::sync::Arc;

use co2_dashboard::analysis::Figure;
use co2_dashboard::config::DashboardSettings;
use co2_dashboard::dashboard::DefaultSelection;
use co2_dashboard::{
    current_mode_banner, describe, ChartKind, Dashboard, FilterParams, Mode, YearRange,
};
use common::builders::DatasetBuilder;

fn dashboard() -> Dashboard {
    let ds = DatasetBuilder::new()
        .series("USA", 1990..=2019, 19.0, -0.1)
        .series("China", 1990..=2019, 2.0, 0.2)
        .series("India", 1990..=2019, 0.7, 0.05)
        .build();
    Dashboard::new(Arc::new(ds))
}

#[test]
fn test_every_mode_has_charts_and_banner() {
    let dash = dashboard();
    for mode in Mode::ALL {
        let view = dash.view(&dash.default_params(mode));
        assert_eq!(view.mode, mode);
        assert_eq!(view.banner, current_mode_banner(mode.id()));
        assert_eq!(view.description, describe(mode.id()));
        assert!(!view.charts.is_empty());
        assert!(view.charts.iter().all(|c| !c.spec.is_placeholder));
    }
}

#[test]
fn test_worldview_histogram_counts_match_subset() {
    let dash = dashboard();
    let view = dash.view(&FilterParams::Worldview {
        year_range: YearRange::new(2000, 2009),
    });
    assert_eq!(view.row_count, 30);

    let kinds: Vec<ChartKind> = view.charts.iter().map(|c| c.spec.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Histogram]);

    match &view.charts[1].figure {
        Figure::Histogram(bins) => {
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), view.row_count);
        }
        other => panic!("expected histogram, got {other:?}"),
    }
}

#[test]
fn test_single_country_box_quartiles_are_ordered() {
    let dash = dashboard();
    let view = dash.view(&FilterParams::SingleCountry {
        country: "China".to_string(),
        year_range: YearRange::new(1990, 2019),
    });
    match &view.charts[1].figure {
        Figure::Boxes(boxes) => {
            let b = &boxes[0];
            assert!(b.lower_whisker <= b.q1);
            assert!(b.q1 <= b.median);
            assert!(b.median <= b.q3);
            assert!(b.q3 <= b.upper_whisker);
            common::assert_float_eq(b.median, 2.0 + 0.2 * 14.5, 1e-9);
        }
        other => panic!("expected box plot, got {other:?}"),
    }
}

#[test]
fn test_comparison_violins_follow_dataset_order() {
    let dash = dashboard();
    let view = dash.view(&FilterParams::MultipleCountry {
        countries: ["India", "USA"].iter().map(|s| s.to_string()).collect(),
        year_range: YearRange::new(1990, 2019),
    });
    match &view.charts[1].figure {
        Figure::Violins(violins) => {
            let names: Vec<_> = violins.iter().map(|v| v.name.as_deref()).collect();
            assert_eq!(names, vec![Some("USA"), Some("India")]);
        }
        other => panic!("expected violins, got {other:?}"),
    }
}

#[test]
fn test_year_outside_dataset_gives_placeholder() {
    let dash = dashboard();
    let view = dash.view(&FilterParams::YearView { year: 1850 });
    assert_eq!(view.row_count, 0);
    assert_eq!(view.charts.len(), 1);
    assert!(view.charts[0].spec.is_placeholder);
    assert_eq!(view.charts[0].figure, Figure::Empty);
}

#[test]
fn test_settings_defaults_seed_selection() {
    let settings = DashboardSettings::from_toml_str(
        r#"
        [defaults]
        country = "India"
        comparison = ["India", "Atlantis"]
        "#,
    )
    .unwrap();
    let dash = dashboard().with_defaults(settings.default_selection());

    assert_eq!(
        dash.default_params(Mode::SingleCountry),
        FilterParams::SingleCountry {
            country: "India".to_string(),
            year_range: YearRange::new(1990, 2019),
        }
    );
    match dash.default_params(Mode::MultipleCountry) {
        FilterParams::MultipleCountry { countries, .. } => {
            assert_eq!(countries.into_iter().collect::<Vec<_>>(), vec!["India"]);
        }
        other => panic!("unexpected params {other:?}"),
    }
    assert_ne!(settings.default_selection(), DefaultSelection::default());
}
