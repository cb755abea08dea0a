use happiness_chart::chart::layout::{self, BAR_HEIGHT, LEGEND_BAND, ROW_HEIGHT};
use happiness_chart::chart::scale::{HAPPINESS_STOPS, LinearScale, Rgb, SequentialScale};
use happiness_chart::chart::tooltip::{self, TooltipContent};
use happiness_chart::Record;

fn record(country: &str, score: Option<f64>) -> Record {
    Record {
        country: country.to_string(),
        overall_rank: None,
        score,
        gdp_per_capita: None,
        social_support: None,
        healthy_life_expectancy: None,
        freedom_to_make_life_choices: None,
        generosity: None,
        perceptions_of_corruption: None,
    }
}

#[test]
fn linear_scale_maps_domain_onto_range() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_eq!(scale.scale(0.0), 0.0);
    assert_eq!(scale.scale(5.0), 50.0);
    assert_eq!(scale.scale(10.0), 100.0);
}

#[test]
fn zero_width_domain_maps_to_range_start() {
    let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
    assert_eq!(scale.scale(3.0), 0.0);
}

#[test]
fn color_ramp_ends_are_red_and_green() {
    let scale = SequentialScale::happiness((2.0, 8.0));
    assert_eq!(scale.color(2.0).css(), "#8b0000");
    assert_eq!(scale.color(8.0).css(), "#00ff00");
}

#[test]
fn color_ramp_hits_every_stop() {
    let scale = SequentialScale::happiness((0.0, 5.0));
    for (i, stop) in HAPPINESS_STOPS.iter().enumerate() {
        assert_eq!(scale.color(i as f64), *stop);
    }
}

#[test]
fn colors_between_stops_interpolate() {
    let scale = SequentialScale::happiness((0.0, 5.0));
    // Halfway between yellow (#ffff00) and yellow-green (#9acd32).
    let color = scale.color(3.5);
    assert_eq!(color, Rgb::new(0xcd, 0xe6, 0x19));
}

#[test]
fn out_of_domain_values_clamp() {
    let scale = SequentialScale::happiness((2.0, 8.0));
    assert_eq!(scale.color(0.0), scale.color(2.0));
    assert_eq!(scale.color(9.5), scale.color(8.0));
}

#[test]
fn rows_stack_at_fixed_height_under_the_legend() {
    let view = vec![
        record("Finland", Some(7.769)),
        record("Denmark", Some(7.600)),
        record("Norway", Some(7.554)),
    ];
    let chart = layout::compute(&view, 1024.0);

    assert_eq!(chart.bars.len(), 3);
    for (i, bar) in chart.bars.iter().enumerate() {
        assert_eq!(bar.index, i);
        assert_eq!(bar.y, i as f64 * ROW_HEIGHT + LEGEND_BAND);
        assert_eq!(bar.height, BAR_HEIGHT);
    }
    assert_eq!(chart.height, 3.0 * ROW_HEIGHT + LEGEND_BAND);
}

#[test]
fn bar_lengths_scale_linearly_to_the_view_maximum() {
    let view = vec![record("Finland", Some(8.0)), record("Atlantis", Some(4.0))];
    let chart = layout::compute(&view, 1150.0);

    // Range is viewport minus the bar margin: [0, 1000].
    assert_eq!(chart.bars[0].width, 1000.0);
    assert_eq!(chart.bars[1].width, 500.0);
}

#[test]
fn fills_follow_the_score_order() {
    let view = vec![
        record("Top", Some(8.0)),
        record("Middle", Some(6.0)),
        record("Bottom", Some(4.0)),
    ];
    let chart = layout::compute(&view, 1024.0);

    assert_eq!(chart.bars[0].fill.css(), "#00ff00");
    assert_eq!(chart.bars[2].fill.css(), "#8b0000");
    assert_ne!(chart.bars[1].fill, chart.bars[0].fill);
    assert_ne!(chart.bars[1].fill, chart.bars[2].fill);
}

#[test]
fn null_scores_are_degenerate_and_excluded_from_domains() {
    let view = vec![
        record("Finland", Some(8.0)),
        record("Atlantis", None),
        record("Denmark", Some(4.0)),
    ];
    let chart = layout::compute(&view, 1150.0);

    let atlantis = &chart.bars[1];
    assert!(atlantis.degenerate);
    assert_eq!(atlantis.width, 0.0);
    assert_eq!(atlantis.score_text, "n/a");

    // The null score did not drag the x-scale domain down.
    assert_eq!(chart.bars[0].width, 1000.0);
    assert_eq!(chart.bars[2].width, 500.0);
    // Nor the color domain: min is Denmark's 4.0, max Finland's 8.0.
    assert_eq!(chart.bars[0].fill.css(), "#00ff00");
    assert_eq!(chart.bars[2].fill.css(), "#8b0000");
}

#[test]
fn empty_view_lays_out_nothing_but_the_legend() {
    let chart = layout::compute(&[], 1024.0);
    assert!(chart.bars.is_empty());
    assert_eq!(chart.height, LEGEND_BAND);
    assert_eq!(chart.legend.len(), 3);
}

#[test]
fn legend_has_three_ordered_centered_swatches() {
    let chart = layout::compute(&[record("Finland", Some(7.769))], 1024.0);

    let labels: Vec<&str> = chart.legend.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        vec!["High Happiness", "Medium Happiness", "Low Happiness"]
    );
    assert_eq!(chart.legend[0].color, Rgb::new(0x00, 0xff, 0x00));
    assert_eq!(chart.legend[1].color, Rgb::new(0xff, 0xff, 0x00));
    assert_eq!(chart.legend[2].color, Rgb::new(0xff, 0x00, 0x00));

    // Swatches run left to right, centered inside the chart width.
    assert!(chart.legend[0].x > 0.0);
    assert!(chart.legend[0].x < chart.legend[1].x);
    assert!(chart.legend[1].x < chart.legend[2].x);
    assert!(chart.legend[2].x < chart.width);
}

#[test]
fn tooltip_lists_score_and_every_factor() {
    let mut finland = record("Finland", Some(7.769));
    finland.gdp_per_capita = Some(1.340);
    finland.social_support = Some(1.587);
    finland.healthy_life_expectancy = Some(0.986);
    finland.freedom_to_make_life_choices = Some(0.596);
    finland.generosity = Some(0.153);
    finland.perceptions_of_corruption = Some(0.393);

    let content = TooltipContent::for_record(&finland);
    assert_eq!(content.title, "Finland");
    assert_eq!(content.lines.len(), 7);
    assert_eq!(content.lines[0].0, "Happiness Score");
    assert_eq!(content.lines[0].1, "7.769");
    assert_eq!(content.lines[1], ("GDP per capita".to_string(), "1.34".to_string()));

    let html = content.to_html();
    assert!(html.contains("tooltip-title"));
    assert!(html.contains("<strong>Generosity:</strong> 0.153"));
}

#[test]
fn tooltip_prints_null_values_as_not_available() {
    let content = TooltipContent::for_record(&record("Atlantis", None));
    assert_eq!(content.lines[0].1, "n/a");
    assert!(content.lines.iter().all(|(_, value)| value == "n/a"));
}

#[test]
fn tooltip_sits_near_the_cursor() {
    assert_eq!(tooltip::position(100.0, 200.0), (110.0, 172.0));
}
