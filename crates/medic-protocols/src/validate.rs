use std::collections::{BTreeMap, BTreeSet};

use medic_core::code::ProtocolCode;
use medic_core::models::category::CategoryMenu;
use medic_core::models::protocol::{DispositionKind, Protocol, Trigger};

use crate::error::ConfigIssue;

/// Check a menu and protocol set for wiring and definition problems.
///
/// Every problem is reported; an empty result means the configuration is
/// safe to serve.
pub fn validate(menus: &[CategoryMenu], protocols: &[Protocol]) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let mut seen_categories = BTreeSet::new();
    for menu in menus {
        if !seen_categories.insert(menu.code.as_str()) {
            issues.push(ConfigIssue::DuplicateCategory {
                code: menu.code.clone(),
            });
        }
    }

    let mut by_code: BTreeMap<&str, &Protocol> = BTreeMap::new();
    for protocol in protocols {
        if by_code.insert(protocol.code.as_str(), protocol).is_some() {
            issues.push(ConfigIssue::DuplicateProtocol {
                code: protocol.code.clone(),
            });
        }
        issues.extend(validate_protocol(protocol));
    }

    let mut listed = BTreeSet::new();
    for menu in menus {
        for code in &menu.protocols {
            if !listed.insert(code.as_str()) {
                issues.push(ConfigIssue::DuplicateMenuEntry { code: code.clone() });
            }
            match by_code.get(code.as_str()) {
                None => issues.push(ConfigIssue::MissingProtocol {
                    category: menu.code.clone(),
                    code: code.clone(),
                }),
                Some(protocol) if protocol.category != menu.code => {
                    issues.push(ConfigIssue::CategoryMismatch {
                        code: code.clone(),
                        category: protocol.category.clone(),
                        listed_under: menu.code.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for code in by_code.keys() {
        if !listed.contains(code) {
            issues.push(ConfigIssue::UnlistedProtocol {
                code: code.to_string(),
            });
        }
    }

    issues
}

/// Checks that only concern a single protocol.
pub fn validate_protocol(protocol: &Protocol) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let code = &protocol.code;

    match ProtocolCode::parse(code) {
        Ok(parsed) if parsed.category == protocol.category => {}
        _ => issues.push(ConfigIssue::InvalidCode { code: code.clone() }),
    }

    if protocol.fallback.trim().is_empty() {
        issues.push(ConfigIssue::EmptyFallback {
            protocol: code.clone(),
        });
    }

    let mut keys = BTreeSet::new();
    let mut ranked_below_red_flags = false;
    for dp in &protocol.decision_points {
        if !keys.insert(dp.key.as_str()) {
            issues.push(ConfigIssue::DuplicateDecisionPoint {
                protocol: code.clone(),
                key: dp.key.clone(),
            });
        }

        match dp.kind {
            DispositionKind::RedFlag if ranked_below_red_flags => {
                issues.push(ConfigIssue::RedFlagOutOfOrder {
                    protocol: code.clone(),
                    key: dp.key.clone(),
                });
            }
            DispositionKind::RedFlag => {}
            DispositionKind::Fallback if dp.key != protocol.fallback => {
                issues.push(ConfigIssue::StrayFallback {
                    protocol: code.clone(),
                    key: dp.key.clone(),
                });
            }
            DispositionKind::Fallback => {}
            DispositionKind::Disposition | DispositionKind::Retest => {
                ranked_below_red_flags = true;
            }
        }

        if dp.kind != DispositionKind::Fallback {
            issues.extend(check_threshold(code, &dp.key, &dp.trigger));
        }
    }

    if !protocol.fallback.trim().is_empty() {
        let fallback_at = protocol
            .decision_points
            .iter()
            .position(|dp| dp.kind == DispositionKind::Fallback && dp.key == protocol.fallback);
        match fallback_at {
            None => issues.push(ConfigIssue::MissingFallback {
                protocol: code.clone(),
                key: protocol.fallback.clone(),
            }),
            Some(index) if index + 1 != protocol.decision_points.len() => {
                issues.push(ConfigIssue::MisplacedFallback {
                    protocol: code.clone(),
                    key: protocol.fallback.clone(),
                })
            }
            Some(_) => {}
        }
    }

    if let Some(rule) = &protocol.subquestion {
        issues.extend(check_threshold(code, &rule.region, &rule.trigger));
    }

    let controls = protocol.control_ids();
    for id in protocol.labels.keys() {
        if !controls.contains(id.as_str()) {
            issues.push(ConfigIssue::UnusedLabel {
                protocol: code.clone(),
                id: id.clone(),
            });
        }
    }

    issues
}

fn check_threshold(protocol: &str, owner: &str, trigger: &Trigger) -> Option<ConfigIssue> {
    match trigger {
        Trigger::Threshold {
            members, minimum, ..
        } if *minimum == 0 || *minimum > members.len() => Some(ConfigIssue::InvalidThreshold {
            protocol: protocol.to_string(),
            owner: owner.to_string(),
            minimum: *minimum,
            members: members.len(),
        }),
        _ => None,
    }
}
