//! Core comparison logic implementation.

use crate::comparison::{
    ComparisonOptions, ComparisonResult, ComparisonStats, HeaderMatch, IeMatch, IeMatchType,
    IeMismatch, MessageDiff, MismatchReason, OptionalIeMode,
};
use crate::ie::{Ie, IeType};
use crate::message::Message;
use std::collections::{HashMap, HashSet};
use std::io;

/// Check if an IE type is a grouped IE (contains child IEs).
///
/// Grouped IEs are defined per 3GPP TS 29.244 Section 8.2 as Information Elements
/// that contain other Information Elements as their payload.
fn is_grouped_ie(ie_type: IeType) -> bool {
    matches!(
        ie_type,
        IeType::CreatePdr
            | IeType::Pdi
            | IeType::CreateFar
            | IeType::ForwardingParameters
            | IeType::DuplicatingParameters
            | IeType::CreateUrr
            | IeType::CreateQer
            | IeType::CreatedPdr
            | IeType::UpdatePdr
            | IeType::UpdateFar
            | IeType::UpdateForwardingParameters
            | IeType::UpdateBarWithinSessionReportResponse
            | IeType::UpdateUrr
            | IeType::UpdateQer
            | IeType::CreateBar
            | IeType::UpdateBar
            | IeType::LoadControlInformation
            | IeType::OverloadControlInformation
            | IeType::ApplicationIdsPfds
            | IeType::PfdContext
            | IeType::UpdateDuplicatingParameters
            | IeType::CreateTrafficEndpoint
            | IeType::UpdateTrafficEndpoint
            | IeType::UsageReportWithinSessionModificationResponse
            | IeType::UsageReportWithinSessionDeletionResponse
            | IeType::UsageReportWithinSessionReportRequest
            | IeType::UpdateMar
            | IeType::UpdateTgppAccessForwardingActionInformation
            | IeType::UpdateNonTgppAccessForwardingActionInformation
            | IeType::UpdateSrr
            | IeType::UpdatedPdr
            | IeType::RedundantTransmissionForwardingParameters
    )
}

/// Parse child IEs from a grouped IE payload.
///
/// Extracts all child Information Elements from a grouped IE's payload
/// by iteratively unmarshaling each TLV-encoded child IE.
///
/// # Returns
/// Vector of child IEs in the order they appear in the payload.
fn parse_child_ies(payload: &[u8]) -> Result<Vec<Ie>, io::Error> {
    let mut child_ies = Vec::new();
    let mut offset = 0;

    while offset < payload.len() {
        let ie = Ie::unmarshal(&payload[offset..])?;
        let ie_len = ie.marshal().len();
        child_ies.push(ie);
        offset += ie_len;
    }

    Ok(child_ies)
}

/// Execute a full message comparison.
///
/// This is the main entry point for comparison logic, called by the builder.
pub fn execute_comparison(
    left: &dyn Message,
    right: &dyn Message,
    options: &ComparisonOptions,
) -> Result<ComparisonResult, io::Error> {
    let mut stats = ComparisonStats::new();

    // Compare headers
    let header_match = compare_headers(left, right, options);

    // Collect IEs from both messages
    let left_ies = collect_ies(left);
    let right_ies = collect_ies(right);

    // Compare IEs
    let (ie_matches, ie_mismatches, left_only_ies, right_only_ies) =
        compare_ies(&left_ies, &right_ies, options, &mut stats)?;

    // Determine overall match status
    let is_match = header_match.is_complete_match()
        && ie_mismatches.is_empty()
        && match options.optional_ie_mode {
            OptionalIeMode::Strict => left_only_ies.is_empty() && right_only_ies.is_empty(),
            OptionalIeMode::IgnoreMissing => true,
            OptionalIeMode::RequireLeft => right_only_ies.is_empty(),
            OptionalIeMode::RequireRight => left_only_ies.is_empty(),
        };

    // Generate diff if requested
    let diff = if options.generate_diff {
        let result = ComparisonResult {
            left_type: left.msg_type(),
            right_type: right.msg_type(),
            is_match,
            header_match: header_match.clone(),
            ie_matches: ie_matches.clone(),
            ie_mismatches: ie_mismatches.clone(),
            left_only_ies: left_only_ies.clone(),
            right_only_ies: right_only_ies.clone(),
            diff: None,
            stats: stats.clone(),
        };
        Some(MessageDiff::from_result(&result))
    } else {
        None
    };

    Ok(ComparisonResult {
        left_type: left.msg_type(),
        right_type: right.msg_type(),
        is_match,
        header_match,
        ie_matches,
        ie_mismatches,
        left_only_ies,
        right_only_ies,
        diff,
        stats,
    })
}

/// Compare message headers.
fn compare_headers(
    left: &dyn Message,
    right: &dyn Message,
    options: &ComparisonOptions,
) -> HeaderMatch {
    let message_type_match = left.msg_type() == right.msg_type();

    let sequence_match = if options.ignore_sequence {
        None
    } else {
        Some(left.sequence() == right.sequence())
    };

    let seid_match = if options.ignore_seid {
        None
    } else {
        match (left.seid(), right.seid()) {
            (Some(left_seid), Some(right_seid)) => Some(left_seid == right_seid),
            (None, None) => Some(true),
            _ => Some(false),
        }
    };

    // Note: Message trait doesn't expose priority, so we default to None
    let priority_match = if options.ignore_priority {
        None
    } else {
        // Would need to add priority() to Message trait
        None
    };

    HeaderMatch {
        message_type_match,
        sequence_match,
        seid_match,
        priority_match,
    }
}

/// Collect all IEs from a message into a map grouped by type.
///
/// Uses references to avoid unnecessary cloning of IE data.
fn collect_ies(msg: &dyn Message) -> HashMap<IeType, Vec<&Ie>> {
    let mut ie_map: HashMap<IeType, Vec<&Ie>> = HashMap::new();

    // Get all IEs from the message - no cloning needed
    for ie in msg.all_ies() {
        ie_map.entry(ie.ie_type).or_default().push(ie);
    }

    ie_map
}

/// Compare IEs from both messages.
#[allow(clippy::type_complexity)]
fn compare_ies(
    left_ies: &HashMap<IeType, Vec<&Ie>>,
    right_ies: &HashMap<IeType, Vec<&Ie>>,
    options: &ComparisonOptions,
    stats: &mut ComparisonStats,
) -> Result<(Vec<IeMatch>, Vec<IeMismatch>, Vec<IeType>, Vec<IeType>), io::Error> {
    let mut ie_matches = Vec::new();
    let mut ie_mismatches = Vec::new();
    let mut left_only_ies = Vec::new();
    let mut right_only_ies = Vec::new();

    // Collect all IE types from both sides
    let all_ie_types: HashSet<IeType> = left_ies.keys().chain(right_ies.keys()).copied().collect();

    for ie_type in all_ie_types {
        // Check if we should compare this IE
        if !options.should_compare_ie(ie_type) {
            stats.ignored_ies += 1;
            continue;
        }

        stats.total_ies_compared += 1;

        let left_instances = left_ies.get(&ie_type);
        let right_instances = right_ies.get(&ie_type);

        match (left_instances, right_instances) {
            (Some(left), Some(right)) => {
                // Both sides have this IE type
                let result = compare_ie_instances(left, right, ie_type, options)?;
                match result {
                    IeComparisonResult::Match(match_type) => {
                        ie_matches.push(IeMatch {
                            ie_type,
                            match_type,
                        });
                        match match_type {
                            IeMatchType::Exact => stats.exact_matches += 1,
                            IeMatchType::Semantic => stats.semantic_matches += 1,
                            IeMatchType::MultipleMatched => stats.exact_matches += 1,
                            IeMatchType::DeepGrouped => stats.exact_matches += 1,
                        }
                    }
                    IeComparisonResult::Mismatch(reason, left_payload, right_payload) => {
                        ie_mismatches.push(IeMismatch {
                            ie_type,
                            reason,
                            left_payload: if options.include_payload_in_diff {
                                left_payload
                            } else {
                                None
                            },
                            right_payload: if options.include_payload_in_diff {
                                right_payload
                            } else {
                                None
                            },
                            context: None,
                        });
                        stats.mismatches += 1;
                    }
                }
            }
            (Some(_), None) => {
                // IE only in left
                left_only_ies.push(ie_type);
            }
            (None, Some(_)) => {
                // IE only in right
                right_only_ies.push(ie_type);
            }
            (None, None) => unreachable!(),
        }

        // Limit differences if requested
        if let Some(max) = options.max_reported_differences {
            if ie_mismatches.len() + left_only_ies.len() + right_only_ies.len() >= max {
                break;
            }
        }
    }

    Ok((ie_matches, ie_mismatches, left_only_ies, right_only_ies))
}

/// Result of comparing IE instances.
enum IeComparisonResult {
    Match(IeMatchType),
    Mismatch(MismatchReason, Option<Vec<u8>>, Option<Vec<u8>>),
}

/// Compare instances of a specific IE type.
fn compare_ie_instances(
    left: &[&Ie],
    right: &[&Ie],
    ie_type: IeType,
    options: &ComparisonOptions,
) -> Result<IeComparisonResult, io::Error> {
    // Check count
    if left.len() != right.len() {
        return Ok(IeComparisonResult::Mismatch(
            MismatchReason::CountMismatch {
                left_count: left.len(),
                right_count: right.len(),
            },
            None,
            None,
        ));
    }

    // Single instance case
    if left.len() == 1 {
        let left_ie = left[0];
        let right_ie = right[0];

        return compare_single_ie(left_ie, right_ie, ie_type, options);
    }

    // Multiple instances - compare based on multiplicity mode
    match options.ie_multiplicity_mode {
        crate::comparison::IeMultiplicityMode::ExactMatch => {
            // All must match in some order
            for &left_ie in left {
                let found_match = right.iter().any(|&right_ie| {
                    matches!(
                        compare_single_ie(left_ie, right_ie, ie_type, options),
                        Ok(IeComparisonResult::Match(_))
                    )
                });
                if !found_match {
                    return Ok(IeComparisonResult::Mismatch(
                        MismatchReason::ValueMismatch,
                        Some(left_ie.payload.clone()),
                        None,
                    ));
                }
            }
            Ok(IeComparisonResult::Match(IeMatchType::MultipleMatched))
        }
        crate::comparison::IeMultiplicityMode::SetEquality => {
            // Order matters - compare pairwise
            for (&left_ie, &right_ie) in left.iter().zip(right.iter()) {
                match compare_single_ie(left_ie, right_ie, ie_type, options)? {
                    IeComparisonResult::Match(_) => {}
                    mismatch => return Ok(mismatch),
                }
            }
            Ok(IeComparisonResult::Match(IeMatchType::MultipleMatched))
        }
        crate::comparison::IeMultiplicityMode::Lenient => {
            // At least one match is sufficient
            for &left_ie in left {
                for &right_ie in right {
                    if matches!(
                        compare_single_ie(left_ie, right_ie, ie_type, options),
                        Ok(IeComparisonResult::Match(_))
                    ) {
                        return Ok(IeComparisonResult::Match(IeMatchType::MultipleMatched));
                    }
                }
            }
            Ok(IeComparisonResult::Mismatch(
                MismatchReason::ValueMismatch,
                None,
                None,
            ))
        }
    }
}

/// Deep comparison of grouped IEs by recursively comparing child IEs.
///
/// Parses the payloads of both grouped IEs to extract their child IEs,
/// then compares the children using the same comparison logic applied to
/// top-level IEs.
fn compare_grouped_ie_deep(
    left: &Ie,
    right: &Ie,
    _ie_type: IeType,
    options: &ComparisonOptions,
) -> Result<IeComparisonResult, io::Error> {
    // Parse child IEs from both payloads
    let left_children = parse_child_ies(&left.payload)?;
    let right_children = parse_child_ies(&right.payload)?;

    // Group child IEs by type using references (same as top-level IE collection)
    let mut left_grouped: HashMap<IeType, Vec<&Ie>> = HashMap::new();
    for ie in &left_children {
        left_grouped.entry(ie.ie_type).or_default().push(ie);
    }

    let mut right_grouped: HashMap<IeType, Vec<&Ie>> = HashMap::new();
    for ie in &right_children {
        right_grouped.entry(ie.ie_type).or_default().push(ie);
    }

    // Compare child IEs using the same logic as top-level IEs
    // Note: We don't update stats here as they're updated at the top level
    let mut child_stats = ComparisonStats::new();
    let (_ie_matches, ie_mismatches, left_only_ies, right_only_ies) =
        compare_ies(&left_grouped, &right_grouped, options, &mut child_stats)?;

    // Determine if grouped IE matches based on child comparison results
    let is_match = ie_mismatches.is_empty()
        && match options.optional_ie_mode {
            OptionalIeMode::Strict => left_only_ies.is_empty() && right_only_ies.is_empty(),
            OptionalIeMode::IgnoreMissing => true,
            OptionalIeMode::RequireLeft => right_only_ies.is_empty(),
            OptionalIeMode::RequireRight => left_only_ies.is_empty(),
        };

    if is_match {
        Ok(IeComparisonResult::Match(IeMatchType::DeepGrouped))
    } else {
        Ok(IeComparisonResult::Mismatch(
            MismatchReason::GroupedIeMismatch {
                child_mismatches: ie_mismatches.len(),
                missing_in_right: left_only_ies.len(),
                missing_in_left: right_only_ies.len(),
            },
            Some(left.payload.clone()),
            Some(right.payload.clone()),
        ))
    }
}

/// Compare a single IE.
fn compare_single_ie(
    left: &Ie,
    right: &Ie,
    ie_type: IeType,
    options: &ComparisonOptions,
) -> Result<IeComparisonResult, io::Error> {
    // Check if this is a grouped IE and deep comparison is enabled
    if options.deep_compare_grouped && is_grouped_ie(ie_type) {
        return compare_grouped_ie_deep(left, right, ie_type, options);
    }

    // Use semantic comparison if requested and available for this IE type
    if options.use_semantic_for_ie(ie_type) {
        if let Some(semantic_result) =
            crate::comparison::semantic::compare_semantically_with_tolerance(
                ie_type,
                &left.payload,
                &right.payload,
                options.timestamp_tolerance_secs,
            )?
        {
            return match semantic_result {
                crate::comparison::semantic::SemanticMatch::Match => {
                    Ok(IeComparisonResult::Match(IeMatchType::Semantic))
                }
                crate::comparison::semantic::SemanticMatch::Mismatch { details } => {
                    Ok(IeComparisonResult::Mismatch(
                        MismatchReason::SemanticMismatch { details },
                        Some(left.payload.clone()),
                        Some(right.payload.clone()),
                    ))
                }
            };
        }
        // If semantic comparison not available for this IE type, fall through to exact comparison
    }

    // Exact payload comparison
    if left.payload == right.payload {
        Ok(IeComparisonResult::Match(IeMatchType::Exact))
    } else {
        Ok(IeComparisonResult::Mismatch(
            MismatchReason::ValueMismatch,
            Some(left.payload.clone()),
            Some(right.payload.clone()),
        ))
    }
}
