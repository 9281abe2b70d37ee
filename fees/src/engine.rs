//! The fee period ledger engine.

use crate::capabilities::{BalanceRegistry, Clock, TokenLedger};
use crate::config::{FeeConfig, PCT_BASE};
use crate::error::FeesError;
use crate::period::{Period, PeriodBalance, PeriodFee, Subscriber};
use std::collections::HashMap;
use tribunal_types::{Address, PeriodId, TermId};

/// Tracks subscriber payments and per-period fee collections.
///
/// Periods are implicit in the clock; their records materialize lazily on
/// first access. External collaborators are passed per call.
#[derive(Debug)]
pub struct FeesEngine {
    config: FeeConfig,
    subscribers: HashMap<Address, Subscriber>,
    periods: HashMap<PeriodId, Period>,
    /// Governor share carved out of payments, waiting to be drained.
    accumulated_governor_fees: u128,
}

impl FeesEngine {
    pub fn new(config: FeeConfig) -> Result<Self, FeesError> {
        config.validate()?;
        Ok(Self {
            config,
            subscribers: HashMap::new(),
            periods: HashMap::new(),
            accumulated_governor_fees: 0,
        })
    }

    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Index of the period the clock currently sits in.
    pub fn current_period_id(&self, clock: &dyn Clock) -> PeriodId {
        clock.current_term_id().since(self.config.start_term) / self.config.period_duration
    }

    /// First term of `period_id`.
    pub fn period_start_term(&self, period_id: PeriodId) -> TermId {
        self.config
            .start_term
            .advanced_by(period_id.saturating_mul(self.config.period_duration))
    }

    /// Fee token and amount effective for a period: the frozen snapshot if
    /// one was taken, otherwise the currently configured values.
    pub fn period_fee(&self, period_id: PeriodId) -> PeriodFee {
        self.periods
            .get(&period_id)
            .and_then(|p| p.fee.clone())
            .unwrap_or_else(|| PeriodFee {
                token: self.config.fee_token.clone(),
                amount: self.config.fee_amount,
            })
    }

    pub fn period(&self, period_id: PeriodId) -> Option<&Period> {
        self.periods.get(&period_id)
    }

    pub fn subscriber(&self, address: &Address) -> Option<&Subscriber> {
        self.subscribers.get(address)
    }

    /// Last period `address` has paid through, if subscribed.
    pub fn last_paid_period(&self, address: &Address) -> Option<PeriodId> {
        self.subscribers
            .get(address)
            .filter(|s| s.subscribed)
            .map(|s| s.last_payment_period_id)
    }

    pub fn accumulated_governor_fees(&self) -> u128 {
        self.accumulated_governor_fees
    }

    /// Periods strictly between `subscriber`'s last paid period and the
    /// current one. Zero for addresses that never subscribed.
    pub fn get_delayed_periods(&self, clock: &dyn Clock, subscriber: &Address) -> u64 {
        let current = self.current_period_id(clock);
        self.subscribers
            .get(subscriber)
            .map_or(0, |s| delayed_periods(s, current))
    }

    /// Whether `subscriber` has paid through the current period.
    pub fn is_up_to_date(&self, clock: &dyn Clock, subscriber: &Address) -> bool {
        let current = self.current_period_id(clock);
        self.subscribers
            .get(subscriber)
            .is_some_and(|s| s.subscribed && s.last_payment_period_id >= current)
    }

    /// Preview what paying `periods` periods would cost `payer` right now:
    /// the resulting last-paid period and the total amount owed.
    pub fn pay_fees_details(
        &self,
        clock: &dyn Clock,
        payer: &Address,
        periods: u64,
    ) -> Result<(PeriodId, u128), FeesError> {
        let current = self.current_period_id(clock);
        let fee_amount = self.period_fee(current).amount;
        let subscriber = self.subscribers.get(payer).cloned().unwrap_or_default();
        self.pay_details(&subscriber, current, fee_amount, periods)
    }

    /// Pay `periods` periods of fees on behalf of `payer`.
    ///
    /// Periods the payer let lapse are charged with the late-payment
    /// surcharge; the rest (current period onward) at the flat fee. The
    /// governor share of the total is carved into the accumulator and the
    /// remainder credited to the current period's collections. Returns the
    /// amount charged.
    pub fn pay_fees(
        &mut self,
        ledger: &mut dyn TokenLedger,
        clock: &dyn Clock,
        payer: &Address,
        periods: u64,
    ) -> Result<u128, FeesError> {
        let current = self.current_period_id(clock);
        let fee = self.period_fee(current);
        let subscriber = self.subscribers.get(payer).cloned().unwrap_or_default();
        let (new_last, amount) = self.pay_details(&subscriber, current, fee.amount, periods)?;
        if new_last.saturating_sub(current) > self.config.pre_payment_periods {
            return Err(FeesError::TooManyPeriods {
                last: new_last,
                current,
                allowed: self.config.pre_payment_periods,
            });
        }

        let governor_fee = pct_of(amount, self.config.governor_share_pct)?;
        let new_accumulated = self
            .accumulated_governor_fees
            .checked_add(governor_fee)
            .ok_or(FeesError::Overflow)?;
        let collected = self
            .periods
            .get(&current)
            .map_or(0, |p| p.collected_fees)
            .checked_add(amount - governor_fee)
            .ok_or(FeesError::Overflow)?;

        ledger.transfer_from(&fee.token, payer, amount)?;

        let period = self.periods.entry(current).or_default();
        period.fee.get_or_insert(fee);
        period.collected_fees = collected;
        self.accumulated_governor_fees = new_accumulated;
        let record = self.subscribers.entry(payer.clone()).or_default();
        record.subscribed = true;
        record.last_payment_period_id = new_last;
        tracing::debug!(payer = %payer, periods, amount, new_last, "fees paid");
        Ok(amount)
    }

    /// Freeze the period's balance checkpoint and total active balance.
    /// Idempotent: the first computed snapshot wins.
    pub fn ensure_period_balance_details(
        &mut self,
        clock: &dyn Clock,
        registry: &dyn BalanceRegistry,
        period_id: PeriodId,
    ) -> PeriodBalance {
        let balance = self.period_balance(clock, registry, period_id);
        *self
            .periods
            .entry(period_id)
            .or_default()
            .balance
            .get_or_insert(balance)
    }

    /// Claim `claimant`'s share of the fees collected in a past period,
    /// pro-rata to their weighted balance at the period's checkpoint.
    /// Returns the amount paid out.
    pub fn claim_fees(
        &mut self,
        ledger: &mut dyn TokenLedger,
        clock: &dyn Clock,
        registry: &dyn BalanceRegistry,
        claimant: &Address,
        period_id: PeriodId,
    ) -> Result<u128, FeesError> {
        let current = self.current_period_id(clock);
        if period_id >= current {
            return Err(FeesError::NonPastPeriod(period_id));
        }
        let period = self.periods.get(&period_id);
        if period.is_some_and(|p| p.claimed.contains(claimant)) {
            return Err(FeesError::AlreadyClaimed(period_id));
        }
        let collected = period.map_or(0, |p| p.collected_fees);
        let balance = self.period_balance(clock, registry, period_id);
        let weight = registry.weight_at(claimant, balance.checkpoint);
        if collected == 0 || weight == 0 || balance.total_active == 0 {
            return Err(FeesError::NothingToClaim(period_id));
        }
        let share = collected
            .checked_mul(weight)
            .ok_or(FeesError::Overflow)?
            / balance.total_active;
        if share == 0 {
            return Err(FeesError::NothingToClaim(period_id));
        }
        let token = self.period_fee(period_id).token;

        ledger.transfer(&token, claimant, share)?;

        let record = self.periods.entry(period_id).or_default();
        record.balance.get_or_insert(balance);
        record.claimed.insert(claimant.clone());
        tracing::debug!(claimant = %claimant, period_id, share, "fees claimed");
        Ok(share)
    }

    /// Drain the accumulated governor share to the configured governor.
    /// Returns the amount transferred.
    pub fn transfer_fees_to_governor(
        &mut self,
        ledger: &mut dyn TokenLedger,
    ) -> Result<u128, FeesError> {
        let amount = self.accumulated_governor_fees;
        if amount == 0 {
            return Err(FeesError::ZeroTransfer);
        }
        ledger.transfer(&self.config.fee_token, &self.config.governor, amount)?;
        self.accumulated_governor_fees = 0;
        tracing::debug!(amount, governor = %self.config.governor, "governor fees transferred");
        Ok(amount)
    }

    /// Split a requested payment into delayed and regular periods and price
    /// it: delayed periods carry the late-payment surcharge.
    fn pay_details(
        &self,
        subscriber: &Subscriber,
        current: PeriodId,
        fee_amount: u128,
        periods: u64,
    ) -> Result<(PeriodId, u128), FeesError> {
        if periods == 0 {
            return Err(FeesError::ZeroPeriodsRequested);
        }
        let delayed = delayed_periods(subscriber, current).min(periods);
        let regular = periods - delayed;

        let new_last = if subscriber.subscribed {
            subscriber
                .last_payment_period_id
                .checked_add(periods)
                .ok_or(FeesError::Overflow)?
        } else {
            // A first payment covers the current period onward.
            current.checked_add(periods - 1).ok_or(FeesError::Overflow)?
        };

        let regular_amount = fee_amount
            .checked_mul(regular as u128)
            .ok_or(FeesError::Overflow)?;
        let delayed_amount = fee_amount
            .checked_mul(delayed as u128)
            .ok_or(FeesError::Overflow)?
            .checked_mul(PCT_BASE as u128 + self.config.late_payment_penalty_pct as u128)
            .ok_or(FeesError::Overflow)?
            / PCT_BASE as u128;
        let amount = regular_amount
            .checked_add(delayed_amount)
            .ok_or(FeesError::Overflow)?;
        Ok((new_last, amount))
    }

    /// The period's balance details: the frozen snapshot if taken, otherwise
    /// computed from the randomness of the next period's start term, so the
    /// sampled term is unknowable while the period is live.
    fn period_balance(
        &self,
        clock: &dyn Clock,
        registry: &dyn BalanceRegistry,
        period_id: PeriodId,
    ) -> PeriodBalance {
        if let Some(balance) = self.periods.get(&period_id).and_then(|p| p.balance) {
            return balance;
        }
        let start = self.period_start_term(period_id);
        let next_start = self.period_start_term(period_id.saturating_add(1));
        let seed = clock.randomness_at(next_start);
        let mut raw = [0u8; 16];
        raw.copy_from_slice(&seed[..16]);
        let offset = (u128::from_be_bytes(raw) % self.config.period_duration as u128) as u64;
        let checkpoint = start.advanced_by(offset);
        PeriodBalance {
            checkpoint,
            total_active: registry.total_weight_at(checkpoint),
        }
    }
}

/// Periods strictly between the subscriber's last paid period and `current`.
fn delayed_periods(subscriber: &Subscriber, current: PeriodId) -> u64 {
    if !subscriber.subscribed || subscriber.last_payment_period_id >= current {
        0
    } else {
        current - subscriber.last_payment_period_id - 1
    }
}

fn pct_of(amount: u128, pct: u32) -> Result<u128, FeesError> {
    Ok(amount
        .checked_mul(pct as u128)
        .ok_or(FeesError::Overflow)?
        / PCT_BASE as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::TransferFailed;

    fn addr(name: &str) -> Address {
        Address::new(name)
    }

    fn config() -> FeeConfig {
        FeeConfig {
            governor: addr("governor"),
            fee_token: addr("token"),
            fee_amount: 100,
            start_term: TermId::new(1),
            period_duration: 10,
            pre_payment_periods: 3,
            late_payment_penalty_pct: 2_000, // 20%
            governor_share_pct: 1_000,       // 10%
        }
    }

    fn engine() -> FeesEngine {
        FeesEngine::new(config()).unwrap()
    }

    /// Clock whose per-term randomness encodes the term number in the low
    /// bytes of the sampled half, so checkpoint offsets are predictable.
    struct TestClock {
        term: u64,
    }

    impl TestClock {
        fn at_period(period: u64) -> Self {
            // First term of the given period under the test config.
            Self {
                term: 1 + period * 10,
            }
        }
    }

    impl Clock for TestClock {
        fn current_term_id(&self) -> TermId {
            TermId::new(self.term)
        }

        fn randomness_at(&self, term: TermId) -> [u8; 32] {
            let mut seed = [0u8; 32];
            seed[8..16].copy_from_slice(&term.as_u64().to_be_bytes());
            seed
        }
    }

    /// Registry with fixed weights, independent of the queried term.
    struct TestRegistry {
        weights: Vec<(Address, u128)>,
        total: u128,
    }

    impl BalanceRegistry for TestRegistry {
        fn weight_at(&self, holder: &Address, _at: TermId) -> u128 {
            self.weights
                .iter()
                .find(|(a, _)| a == holder)
                .map_or(0, |(_, w)| *w)
        }

        fn total_weight_at(&self, _at: TermId) -> u128 {
            self.total
        }
    }

    /// Ledger that records transfers and can be told to fail.
    #[derive(Default)]
    struct TestLedger {
        pulls: Vec<(Address, Address, u128)>,
        payouts: Vec<(Address, Address, u128)>,
        fail: bool,
    }

    impl TokenLedger for TestLedger {
        fn transfer_from(
            &mut self,
            token: &Address,
            from: &Address,
            amount: u128,
        ) -> Result<(), TransferFailed> {
            if self.fail {
                return Err(TransferFailed::new("insufficient allowance"));
            }
            self.pulls.push((token.clone(), from.clone(), amount));
            Ok(())
        }

        fn transfer(
            &mut self,
            token: &Address,
            to: &Address,
            amount: u128,
        ) -> Result<(), TransferFailed> {
            if self.fail {
                return Err(TransferFailed::new("module balance too low"));
            }
            self.payouts.push((token.clone(), to.clone(), amount));
            Ok(())
        }
    }

    #[test]
    fn config_validation() {
        let mut bad = config();
        bad.fee_amount = 0;
        assert_eq!(FeesEngine::new(bad).unwrap_err(), FeesError::ZeroFeeAmount);

        let mut bad = config();
        bad.period_duration = 0;
        assert_eq!(
            FeesEngine::new(bad).unwrap_err(),
            FeesError::ZeroPeriodDuration
        );

        let mut bad = config();
        bad.pre_payment_periods = 0;
        assert_eq!(
            FeesEngine::new(bad).unwrap_err(),
            FeesError::ZeroPrePaymentPeriods
        );

        let mut bad = config();
        bad.governor_share_pct = PCT_BASE + 1;
        assert_eq!(
            FeesEngine::new(bad).unwrap_err(),
            FeesError::GovernorShareTooHigh(PCT_BASE + 1)
        );
    }

    #[test]
    fn period_indexing_follows_the_clock() {
        let engine = engine();
        assert_eq!(engine.current_period_id(&TestClock { term: 1 }), 0);
        assert_eq!(engine.current_period_id(&TestClock { term: 10 }), 0);
        assert_eq!(engine.current_period_id(&TestClock { term: 11 }), 1);
        assert_eq!(engine.current_period_id(&TestClock { term: 31 }), 3);
        // Terms before the start term sit in period 0.
        assert_eq!(engine.current_period_id(&TestClock { term: 0 }), 0);
        assert_eq!(engine.period_start_term(2), TermId::new(21));
    }

    #[test]
    fn first_payment_subscribes_and_collects() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let clock = TestClock::at_period(0);

        let paid = engine
            .pay_fees(&mut ledger, &clock, &addr("app"), 1)
            .unwrap();
        assert_eq!(paid, 100);
        assert_eq!(ledger.pulls, vec![(addr("token"), addr("app"), 100)]);

        let sub = engine.subscriber(&addr("app")).unwrap();
        assert!(sub.subscribed);
        assert_eq!(sub.last_payment_period_id, 0);
        assert_eq!(engine.last_paid_period(&addr("app")), Some(0));

        // 10% governor share carved out of the collection.
        assert_eq!(engine.accumulated_governor_fees(), 10);
        let period = engine.period(0).unwrap();
        assert_eq!(period.collected_fees, 90);
        assert_eq!(
            period.fee,
            Some(PeriodFee {
                token: addr("token"),
                amount: 100
            })
        );
        assert!(engine.is_up_to_date(&clock, &addr("app")));
    }

    #[test]
    fn zero_periods_rejected() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let err = engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 0)
            .unwrap_err();
        assert_eq!(err, FeesError::ZeroPeriodsRequested);
    }

    #[test]
    fn delayed_periods_carry_the_penalty() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();

        engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 1)
            .unwrap();

        // Skip to period 3: periods 1 and 2 lapsed.
        let clock = TestClock::at_period(3);
        assert_eq!(engine.get_delayed_periods(&clock, &addr("app")), 2);
        assert!(!engine.is_up_to_date(&clock, &addr("app")));

        // 2 delayed at 120 each, 1 regular at 100.
        let (new_last, amount) = engine
            .pay_fees_details(&clock, &addr("app"), 3)
            .unwrap();
        assert_eq!(new_last, 3);
        assert_eq!(amount, 340);

        let paid = engine.pay_fees(&mut ledger, &clock, &addr("app"), 3).unwrap();
        assert_eq!(paid, 340);
        assert_eq!(engine.get_delayed_periods(&clock, &addr("app")), 0);
        assert!(engine.is_up_to_date(&clock, &addr("app")));
        // Collections land in the period the payment was made in.
        assert_eq!(engine.period(3).unwrap().collected_fees, 340 - 34);
    }

    #[test]
    fn partial_catch_up_stays_delayed() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 1)
            .unwrap();

        let clock = TestClock::at_period(4);
        assert_eq!(engine.get_delayed_periods(&clock, &addr("app")), 3);

        // Paying 2 of the 3 delayed periods, all at the penalty rate.
        let paid = engine.pay_fees(&mut ledger, &clock, &addr("app"), 2).unwrap();
        assert_eq!(paid, 240);
        assert_eq!(engine.last_paid_period(&addr("app")), Some(2));
        assert_eq!(engine.get_delayed_periods(&clock, &addr("app")), 1);
    }

    #[test]
    fn delayed_periods_zero_for_unsubscribed() {
        let engine = engine();
        assert_eq!(
            engine.get_delayed_periods(&TestClock::at_period(5), &addr("ghost")),
            0
        );
        assert!(!engine.is_up_to_date(&TestClock::at_period(5), &addr("ghost")));
    }

    #[test]
    fn pre_payment_cap_is_enforced() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let clock = TestClock::at_period(0);

        // Paying 5 periods up front would reach period 4 > 0 + 3.
        let err = engine
            .pay_fees(&mut ledger, &clock, &addr("app"), 5)
            .unwrap_err();
        assert_eq!(
            err,
            FeesError::TooManyPeriods {
                last: 4,
                current: 0,
                allowed: 3
            }
        );

        // The cap itself is fine: periods 0..=3.
        engine.pay_fees(&mut ledger, &clock, &addr("app"), 4).unwrap();
        assert_eq!(engine.last_paid_period(&addr("app")), Some(3));

        // Already ahead: one more period would exceed the cap again.
        let err = engine
            .pay_fees(&mut ledger, &clock, &addr("app"), 1)
            .unwrap_err();
        assert_eq!(
            err,
            FeesError::TooManyPeriods {
                last: 4,
                current: 0,
                allowed: 3
            }
        );
    }

    #[test]
    fn last_paid_period_never_decreases() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let mut last = 0;
        for period in [0u64, 2, 3, 6] {
            let clock = TestClock::at_period(period);
            engine.pay_fees(&mut ledger, &clock, &addr("app"), 2).unwrap();
            let now = engine.last_paid_period(&addr("app")).unwrap();
            assert!(now >= last, "last paid went backwards: {now} < {last}");
            last = now;
        }
    }

    #[test]
    fn failed_transfer_aborts_payment_without_mutation() {
        let mut engine = engine();
        let mut ledger = TestLedger {
            fail: true,
            ..Default::default()
        };
        let err = engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 1)
            .unwrap_err();
        assert!(matches!(err, FeesError::Transfer(_)));
        assert!(engine.subscriber(&addr("app")).is_none());
        assert!(engine.period(0).is_none());
        assert_eq!(engine.accumulated_governor_fees(), 0);
    }

    #[test]
    fn claim_pays_pro_rata_share() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let registry = TestRegistry {
            weights: vec![(addr("guardian"), 30)],
            total: 100,
        };

        engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 1)
            .unwrap();

        // Period 0 collected 90; the guardian holds 30 of 100 total weight.
        let clock = TestClock::at_period(1);
        let share = engine
            .claim_fees(&mut ledger, &clock, &registry, &addr("guardian"), 0)
            .unwrap();
        assert_eq!(share, 27);
        assert_eq!(
            ledger.payouts,
            vec![(addr("token"), addr("guardian"), 27)]
        );
        assert!(engine.period(0).unwrap().has_claimed(&addr("guardian")));

        let err = engine
            .claim_fees(&mut ledger, &clock, &registry, &addr("guardian"), 0)
            .unwrap_err();
        assert_eq!(err, FeesError::AlreadyClaimed(0));
    }

    #[test]
    fn claim_requires_past_period() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let registry = TestRegistry {
            weights: vec![],
            total: 0,
        };
        let err = engine
            .claim_fees(
                &mut ledger,
                &TestClock::at_period(0),
                &registry,
                &addr("guardian"),
                0,
            )
            .unwrap_err();
        assert_eq!(err, FeesError::NonPastPeriod(0));
    }

    #[test]
    fn zero_weight_claim_fails() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let registry = TestRegistry {
            weights: vec![],
            total: 100,
        };
        engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 1)
            .unwrap();
        let err = engine
            .claim_fees(
                &mut ledger,
                &TestClock::at_period(1),
                &registry,
                &addr("nobody"),
                0,
            )
            .unwrap_err();
        assert_eq!(err, FeesError::NothingToClaim(0));
    }

    #[test]
    fn claim_on_empty_period_fails() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        let registry = TestRegistry {
            weights: vec![(addr("guardian"), 30)],
            total: 100,
        };
        let err = engine
            .claim_fees(
                &mut ledger,
                &TestClock::at_period(2),
                &registry,
                &addr("guardian"),
                1,
            )
            .unwrap_err();
        assert_eq!(err, FeesError::NothingToClaim(1));
    }

    #[test]
    fn balance_checkpoint_lands_inside_the_period_and_freezes() {
        let mut engine = engine();
        let registry = TestRegistry {
            weights: vec![],
            total: 500,
        };
        let clock = TestClock::at_period(3);

        // Randomness of period 1's next start term (term 21) gives offset
        // 21 % 10 = 1 into period 1, which starts at term 11.
        let balance = engine.ensure_period_balance_details(&clock, &registry, 1);
        assert_eq!(balance.checkpoint, TermId::new(12));
        assert_eq!(balance.total_active, 500);

        // First ensure wins: a different registry cannot move the snapshot.
        let other = TestRegistry {
            weights: vec![],
            total: 9,
        };
        let again = engine.ensure_period_balance_details(&clock, &other, 1);
        assert_eq!(again, balance);
    }

    #[test]
    fn governor_drain() {
        let mut engine = engine();
        let mut ledger = TestLedger::default();
        engine
            .pay_fees(&mut ledger, &TestClock::at_period(0), &addr("app"), 2)
            .unwrap();
        assert_eq!(engine.accumulated_governor_fees(), 20);

        let drained = engine.transfer_fees_to_governor(&mut ledger).unwrap();
        assert_eq!(drained, 20);
        assert_eq!(
            ledger.payouts,
            vec![(addr("token"), addr("governor"), 20)]
        );
        assert_eq!(engine.accumulated_governor_fees(), 0);

        let err = engine.transfer_fees_to_governor(&mut ledger).unwrap_err();
        assert_eq!(err, FeesError::ZeroTransfer);
    }
}
