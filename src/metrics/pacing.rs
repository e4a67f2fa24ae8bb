use super::{MetricsExtractor, round_to};
use crate::model::PacingMetrics;

const MAX_ACTION_BALANCE: f64 = 2.0;

impl MetricsExtractor {
    pub(super) fn pacing(&self, text: &str, total_words: usize) -> PacingMetrics {
        let lengths = self
            .terminated_fragments(text)
            .iter()
            .map(|fragment| fragment.split_whitespace().count())
            .collect::<Vec<usize>>();

        let avg_sentence_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        };
        let sentence_variety = match (lengths.iter().max(), lengths.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        let action_count = self.patterns.action_verb.find_iter(text).count();
        let description_count = self.patterns.description_verb.find_iter(text).count();
        let action_ratio = action_count as f64 / description_count.max(1) as f64;
        let dialog_ratio = self.dialog_share(text, total_words);

        PacingMetrics {
            avg_sentence_length: round_to(avg_sentence_length, 2),
            sentence_variety,
            action_description_ratio: round_to(action_ratio, 2),
            dialog_ratio: round_to(dialog_ratio, 3),
            pacing_score: pacing_score(action_ratio, dialog_ratio),
        }
    }
}

fn pacing_score(action_ratio: f64, dialog_ratio: f64) -> f64 {
    let action_balance = action_ratio.min(MAX_ACTION_BALANCE) / MAX_ACTION_BALANCE;
    let dialog_balance = (dialog_ratio * 2.0).min(1.0);
    round_to((action_balance + dialog_balance) * 5.0, 1).clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::pacing_score;

    #[test]
    fn pacing_score_saturates_at_ten() {
        assert_eq!(pacing_score(5.0, 0.9), 10.0);
        assert_eq!(pacing_score(0.0, 0.0), 0.0);
        assert_eq!(pacing_score(1.0, 0.25), 5.0);
    }
}
