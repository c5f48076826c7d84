//! Consent reminder dispatch.
//!
//! A dispatch selects the template for the target population, prepares one payload per
//! reachable owner, delivers the payloads one by one through a [`MessageChannel`] and records
//! a single send log with the tallied outcome and estimated cost.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use entity::sea_orm_active_enums::{MessageType, TemplateStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::alimtalk::{ConsentReminderRequestDto, ConsentReminderResultDto, ReminderTargetDto},
    server::{
        config::trim_base_url,
        data::{
            alimtalk::{
                log::{AlimtalkLogRepository, NewAlimtalkLog},
                template::AlimtalkTemplateRepository,
            },
            consent::stage::ConsentStageRepository,
            invite::{MemberInviteRepository, NewInvite},
            owner::OwnerRepository,
            union::UnionRepository,
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        model::db::OwnerModel,
        proxy::channel::{DeliveryResult, MessageChannel, Recipient},
        service::alimtalk::pricing::{AlimtalkPricingService, PriceTable},
        util::{phone::deliverable_phone, time::invite_expiry, token::generate_invite_token},
    },
};

/// Template sent to owners without an agreement at a stage.
pub static CONSENT_REMINDER_TEMPLATE: &str = "CONSENT_REMINDER";
/// Template inviting owners without a member account.
pub static REGISTER_INVITE_TEMPLATE: &str = "REGISTER_INVITE";

/// Template sent to each reminder population.
pub fn template_code_for(target: ReminderTargetDto) -> &'static str {
    match target {
        ReminderTargetDto::NonAgreed => CONSENT_REMINDER_TEMPLATE,
        ReminderTargetDto::NonRegistered => REGISTER_INVITE_TEMPLATE,
    }
}

/// Union-wide values substituted into every payload of a dispatch.
#[derive(Debug, Clone)]
pub struct ReminderContext<'a> {
    /// Fills `#{조합명}`
    pub union_name: &'a str,
    /// Path segment of invite links
    pub union_slug: &'a str,
    /// Fills `#{문의전화}`, empty when unset
    pub union_phone: Option<&'a str>,
    /// Stage name, NON_AGREED only
    pub stage_name: Option<&'a str>,
    /// Base of invite links, trailing slashes ignored
    pub public_base_url: &'a str,
}

impl ReminderContext<'_> {
    fn invite_link(&self, token: &str) -> String {
        format!(
            "{}/{}/invite/{}",
            trim_base_url(self.public_base_url),
            self.union_slug,
            token
        )
    }
}

/// One message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMessage {
    /// Owner the message is addressed to
    pub owner_id: i32,
    /// Name and normalized phone
    pub recipient: Recipient,
    /// Template variables keyed by placeholder, e.g. `#{소유자명}`
    pub variables: BTreeMap<String, String>,
    /// Token embedded in the invite link, NON_REGISTERED only
    pub invite_token: Option<String>,
}

/// Builds the payloads of a dispatch.
///
/// Owners whose phone has fewer than 10 digits are dropped; they are neither counted nor
/// given a token. `next_token` is called once per remaining NON_REGISTERED owner.
///
/// # Arguments
/// - `target` - Population the owners were selected for
/// - `context` - Union-wide variable values
/// - `owners` - Candidate recipients
/// - `property_labels` - Property label per building unit id
/// - `next_token` - Invite token source
pub fn prepare_payloads<F>(
    target: ReminderTargetDto,
    context: &ReminderContext<'_>,
    owners: &[OwnerModel],
    property_labels: &HashMap<i32, String>,
    mut next_token: F,
) -> Vec<PreparedMessage>
where
    F: FnMut() -> String,
{
    owners
        .iter()
        .filter_map(|owner| {
            let phone = deliverable_phone(owner.phone.as_deref())?;

            let mut variables = BTreeMap::new();
            variables.insert("#{조합명}".to_string(), context.union_name.to_string());
            variables.insert("#{소유자명}".to_string(), owner.name.clone());
            variables.insert(
                "#{문의전화}".to_string(),
                context.union_phone.unwrap_or_default().to_string(),
            );

            let invite_token = match target {
                ReminderTargetDto::NonAgreed => {
                    let property = owner
                        .building_unit_id
                        .and_then(|unit_id| property_labels.get(&unit_id))
                        .cloned()
                        .unwrap_or_default();

                    variables.insert(
                        "#{동의단계}".to_string(),
                        context.stage_name.unwrap_or_default().to_string(),
                    );
                    variables.insert("#{물건지}".to_string(), property);

                    None
                }
                ReminderTargetDto::NonRegistered => {
                    let token = next_token();
                    variables.insert("#{초대링크}".to_string(), context.invite_link(&token));

                    Some(token)
                }
            };

            Some(PreparedMessage {
                owner_id: owner.id,
                recipient: Recipient {
                    name: owner.name.clone(),
                    phone,
                },
                variables,
                invite_token,
            })
        })
        .collect()
}

/// Delivery outcome of a dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryTally {
    /// Delivered through kakao
    pub kakao_success_count: i32,
    /// Delivered through SMS/LMS failover
    pub sms_success_count: i32,
    /// Not delivered
    pub fail_count: i32,
    /// Sum of the unit prices of the delivered messages
    pub estimated_cost: f64,
}

impl DeliveryTally {
    /// Counts one delivery, charging the unit price of the type it was delivered through
    pub fn record(&mut self, result: &DeliveryResult, prices: &PriceTable) {
        match result {
            DeliveryResult::Delivered(message_type) => {
                match message_type {
                    MessageType::Kakao => self.kakao_success_count += 1,
                    MessageType::Sms | MessageType::Lms => self.sms_success_count += 1,
                }
                self.estimated_cost += prices.price_of(*message_type);
            }
            DeliveryResult::Failed(_) => self.fail_count += 1,
        }
    }
}

/// Service dispatching consent reminders through a [`MessageChannel`].
pub struct ReminderService<'a, M: MessageChannel> {
    db: &'a DatabaseConnection,
    channel: &'a M,
    public_base_url: &'a str,
}

impl<'a, M: MessageChannel> ReminderService<'a, M> {
    /// Creates a new instance of [`ReminderService`]
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `channel` - Channel messages are delivered through
    /// - `public_base_url` - Base URL invite links are built from
    pub fn new(db: &'a DatabaseConnection, channel: &'a M, public_base_url: &'a str) -> Self {
        Self {
            db,
            channel,
            public_base_url,
        }
    }

    /// Sends the reminder for the requested population and records the send log.
    ///
    /// NON_AGREED reaches owners of the union without an agreement at the stage. NON_REGISTERED
    /// reaches owners not linked to a member; each gets an invite token valid for 7 days.
    /// Owners without a deliverable phone are skipped. A log row is written even when nobody
    /// remains to be messaged.
    ///
    /// # Returns
    /// - `Ok(ConsentReminderResultDto)` - Log id, counts and estimated cost
    /// - `Err(Error::ValidationError)` - Union id, target type or (NON_AGREED) stage id
    ///   missing, or template not approved
    /// - `Err(Error::NotFoundError)` - Union, stage or template does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn send(
        &self,
        request: ConsentReminderRequestDto,
    ) -> Result<ConsentReminderResultDto, Error> {
        let union_id = request.union_id.ok_or(ValidationError::MissingUnionId)?;
        let target = request
            .target_type
            .ok_or(ValidationError::MissingTargetType)?;

        let union = UnionRepository::new(self.db)
            .get(union_id)
            .await?
            .ok_or(NotFoundError::Union(union_id))?;

        let template_code = template_code_for(target);
        let template = AlimtalkTemplateRepository::new(self.db)
            .get_by_code(template_code)
            .await?
            .ok_or_else(|| NotFoundError::Template(template_code.to_string()))?;
        if template.status != TemplateStatus::Approved {
            return Err(ValidationError::TemplateNotApproved(template_code.to_string()).into());
        }

        let owner_repo = OwnerRepository::new(self.db);
        let (owners, stage) = match target {
            ReminderTargetDto::NonAgreed => {
                let stage_id = request.stage_id.ok_or(ValidationError::MissingStageId)?;
                let stage = ConsentStageRepository::new(self.db)
                    .get_for_union(union_id, stage_id)
                    .await?
                    .ok_or(NotFoundError::ConsentStage(stage_id))?;

                (owner_repo.get_not_agreed(union_id, stage_id).await?, Some(stage))
            }
            ReminderTargetDto::NonRegistered => (owner_repo.get_unregistered(union_id).await?, None),
        };

        let unit_ids: Vec<i32> = owners
            .iter()
            .filter_map(|owner| owner.building_unit_id)
            .collect();
        let property_labels = owner_repo.get_property_labels(&unit_ids).await?;

        let context = ReminderContext {
            union_name: &union.name,
            union_slug: &union.slug,
            union_phone: union.phone.as_deref(),
            stage_name: stage.as_ref().map(|stage| stage.name.as_str()),
            public_base_url: self.public_base_url,
        };
        let payloads = prepare_payloads(
            target,
            &context,
            &owners,
            &property_labels,
            generate_invite_token,
        );

        tracing::info!(
            "Sending {} to {} of {} owners of union {}",
            template_code,
            payloads.len(),
            owners.len(),
            union_id
        );

        self.store_invites(union_id, &payloads).await?;

        let prices = AlimtalkPricingService::new(self.db).price_table().await?;
        let mut tally = DeliveryTally::default();
        for payload in &payloads {
            let result = self
                .channel
                .send_templated_message(
                    MessageType::Kakao,
                    &payload.recipient,
                    template_code,
                    &payload.variables,
                    template.lms_failover,
                )
                .await;

            if let DeliveryResult::Failed(reason) = &result {
                tracing::debug!(
                    "Delivery of {} to owner {} failed: {}",
                    template_code,
                    payload.owner_id,
                    reason
                );
            }

            tally.record(&result, &prices);
        }

        let recipient_count = payloads.len() as i32;
        let log = AlimtalkLogRepository::new(self.db)
            .create(NewAlimtalkLog {
                union_id: Some(union_id),
                template_code: template_code.to_string(),
                title: template.name,
                recipient_count,
                kakao_success_count: tally.kakao_success_count,
                sms_success_count: tally.sms_success_count,
                fail_count: tally.fail_count,
                estimated_cost: tally.estimated_cost,
            })
            .await?;

        Ok(ConsentReminderResultDto {
            log_id: log.id,
            template_code: template_code.to_string(),
            recipient_count,
            kakao_success_count: tally.kakao_success_count,
            sms_success_count: tally.sms_success_count,
            fail_count: tally.fail_count,
            estimated_cost: tally.estimated_cost,
        })
    }

    async fn store_invites(&self, union_id: i32, payloads: &[PreparedMessage]) -> Result<(), Error> {
        let invites: Vec<NewInvite> = payloads
            .iter()
            .filter_map(|payload| {
                payload.invite_token.as_ref().map(|token| NewInvite {
                    owner_id: payload.owner_id,
                    token: token.clone(),
                })
            })
            .collect();
        if invites.is_empty() {
            return Ok(());
        }

        let expires_at = invite_expiry(Utc::now().naive_utc())?;
        MemberInviteRepository::new(self.db)
            .create_many(union_id, invites, expires_at)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
