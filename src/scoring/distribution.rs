// Category distribution for the dashboard bar chart.
//
// The chart splits a single polarity score into three bars. Positive and
// negative are the clipped halves of the score; neutral is whatever the
// magnitude leaves over, so the three values always sum to 1 for scores in
// [-1, 1].

use serde::Serialize;

use super::labels::SentimentLabel;

/// One bar of the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: SentimentLabel,
    pub score: f64,
}

/// The three chart bars, always in Positive, Negative, Neutral order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution(pub Vec<CategoryScore>);

impl Distribution {
    pub fn get(&self, category: SentimentLabel) -> f64 {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.0.iter()
    }
}

/// Split a (rounded) polarity score into chart categories.
pub fn chart_distribution(score: f64) -> Distribution {
    Distribution(vec![
        CategoryScore {
            category: SentimentLabel::Positive,
            score: score.max(0.0),
        },
        CategoryScore {
            category: SentimentLabel::Negative,
            score: (-score).max(0.0),
        },
        CategoryScore {
            category: SentimentLabel::Neutral,
            score: 1.0 - score.abs(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_score_split() {
        let d = chart_distribution(0.3);
        assert!((d.get(SentimentLabel::Positive) - 0.3).abs() < 1e-9);
        assert_eq!(d.get(SentimentLabel::Negative), 0.0);
        assert!((d.get(SentimentLabel::Neutral) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_order_is_fixed() {
        let d = chart_distribution(-0.5);
        let order: Vec<_> = d.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(chart_distribution(0.0)).unwrap();
        assert_eq!(json[0]["category"], "Positive");
        assert_eq!(json[2]["score"], 1.0);
    }
}
