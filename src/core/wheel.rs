//! Fixed Wheel Bet Construction
//!
//! The recommended ticket set is an anchor-partners trifecta wheel
//! (1-2345-2345 style): the top-ranked rider is fixed on first place
//! and the partner set fills second and third place identically. A
//! wheel over P partners covers P * (P - 1) trifecta combinations.

use serde::{Deserialize, Serialize};

use crate::models::MarkedEntry;

/// Default partner count behind the anchor
pub const DEFAULT_PARTNER_COUNT: usize = 4;
/// Smallest accepted partner count
pub const MIN_PARTNER_COUNT: usize = 2;
/// Largest accepted partner count
pub const MAX_PARTNER_COUNT: usize = 6;

/// Single trifecta combination covered by the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrifectaTicket {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

/// Bet recommendation for a ranked field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BetRecommendation {
    /// Anchor-partners wheel over the top of the ranking
    Formation {
        anchor: u8,
        partners: Vec<u8>,
        tickets: Vec<TrifectaTicket>,
    },
    /// Fewer than two riders ranked; no bet can be formed
    Insufficient,
}

impl BetRecommendation {
    /// Formation line in the operator's notation: `1-[2,3,4,5]-[2,3,4,5]`
    pub fn formation_line(&self) -> Option<String> {
        match self {
            BetRecommendation::Formation {
                anchor, partners, ..
            } => {
                let p = partners
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                Some(format!("{}-[{}]-[{}]", anchor, p, p))
            }
            BetRecommendation::Insufficient => None,
        }
    }
}

/// Build the wheel recommendation from a ranking sorted by descending score
///
/// The anchor is the top entry; partners are the next `partner_count`
/// entries, truncated to however many remain in the field. Fields with
/// fewer than two riders yield [`BetRecommendation::Insufficient`].
pub fn recommend(ranked: &[MarkedEntry], partner_count: usize) -> BetRecommendation {
    if ranked.len() < 2 {
        return BetRecommendation::Insufficient;
    }

    let anchor = ranked[0].no;
    let partners: Vec<u8> = ranked[1..]
        .iter()
        .take(partner_count)
        .map(|entry| entry.no)
        .collect();

    // Enumerate covered combinations: second and third drawn from the
    // partner set without repetition
    let mut tickets = Vec::with_capacity(partners.len() * partners.len().saturating_sub(1));
    for &second in &partners {
        for &third in &partners {
            if second == third {
                continue;
            }
            tickets.push(TrifectaTicket {
                first: anchor,
                second,
                third,
            });
        }
    }

    BetRecommendation::Formation {
        anchor,
        partners,
        tickets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(nos: &[u8]) -> Vec<MarkedEntry> {
        nos.iter()
            .enumerate()
            .map(|(i, &no)| MarkedEntry {
                mark: String::new(),
                no,
                score: 100.0 - i as f64,
            })
            .collect()
    }

    #[test]
    fn test_recommend_five_riders_partner_count_four() {
        let entries = ranked(&[7, 2, 5, 1, 4]);
        let bet = recommend(&entries, 4);

        match bet {
            BetRecommendation::Formation {
                anchor,
                partners,
                tickets,
            } => {
                assert_eq!(anchor, 7);
                assert_eq!(partners, vec![2, 5, 1, 4]);
                // 4 partners -> 4 * 3 = 12 combinations
                assert_eq!(tickets.len(), 12);
            }
            BetRecommendation::Insufficient => panic!("expected formation"),
        }
    }

    #[test]
    fn test_recommend_truncates_to_field_size() {
        let entries = ranked(&[3, 1, 6]);
        let bet = recommend(&entries, 4);

        match bet {
            BetRecommendation::Formation { partners, .. } => {
                assert_eq!(partners, vec![1, 6]);
            }
            BetRecommendation::Insufficient => panic!("expected formation"),
        }
    }

    #[test]
    fn test_recommend_insufficient_field() {
        assert!(matches!(
            recommend(&ranked(&[1]), 4),
            BetRecommendation::Insufficient
        ));
        assert!(matches!(
            recommend(&ranked(&[]), 4),
            BetRecommendation::Insufficient
        ));
    }

    #[test]
    fn test_tickets_anchor_first_no_repeats() {
        let entries = ranked(&[1, 2, 3, 4, 5]);
        let bet = recommend(&entries, 4);

        if let BetRecommendation::Formation { tickets, .. } = bet {
            for t in &tickets {
                assert_eq!(t.first, 1);
                assert_ne!(t.second, t.third);
                assert_ne!(t.first, t.second);
                assert_ne!(t.first, t.third);
            }
        } else {
            panic!("expected formation");
        }
    }

    #[test]
    fn test_formation_line() {
        let entries = ranked(&[1, 2, 3, 4, 5]);
        let bet = recommend(&entries, 4);
        assert_eq!(bet.formation_line().unwrap(), "1-[2,3,4,5]-[2,3,4,5]");

        assert!(BetRecommendation::Insufficient.formation_line().is_none());
    }

    #[test]
    fn test_recommend_two_rider_field() {
        // Smallest field that still forms a bet: one partner, no
        // third-place candidate, so the ticket list is empty
        let entries = ranked(&[9, 4]);
        let bet = recommend(&entries, 4);

        match bet {
            BetRecommendation::Formation {
                anchor,
                partners,
                tickets,
            } => {
                assert_eq!(anchor, 9);
                assert_eq!(partners, vec![4]);
                assert!(tickets.is_empty());
            }
            BetRecommendation::Insufficient => panic!("expected formation"),
        }
    }
}
