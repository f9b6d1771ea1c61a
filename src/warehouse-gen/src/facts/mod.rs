pub mod staging;

use common::config::Pricing;
use rand::Rng;
use rust_decimal::Decimal;

use crate::dims::channels::ChannelType;
use crate::error::Result;
use crate::error::WarehouseGenError;
use crate::vocab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionKey {
    pub key: i64,
    /// False for the "no promotion" record.
    pub is_discount: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelKey {
    pub key: i64,
    pub channel_type: ChannelType,
}

/// Surrogate keys of every dimension, read back after the dimensions are committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPools {
    pub dates: Vec<i32>,
    pub times: Vec<i32>,
    pub customers: Vec<i64>,
    pub promotions: Vec<PromotionKey>,
    pub channels: Vec<ChannelKey>,
    pub showings: Vec<i64>,
}

impl KeyPools {
    pub fn validate(&self) -> Result<()> {
        let pools = [
            ("dates", self.dates.is_empty()),
            ("times", self.times.is_empty()),
            ("customers", self.customers.is_empty()),
            ("promotions", self.promotions.is_empty()),
            ("channels", self.channels.is_empty()),
            ("showings", self.showings.is_empty()),
        ];
        for (name, empty) in pools {
            if empty {
                return Err(WarehouseGenError::EmptyPool(name));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSale {
    pub ticket_id: i64,
    pub transaction_id: i64,
    pub date_key: i32,
    pub time_key: i32,
    pub customer_key: i64,
    pub promotion_key: i64,
    pub channel_key: i64,
    pub showing_key: i64,
    pub ticket_price: Decimal,
    pub ticket_count: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub transaction_id: i64,
    pub tickets: Vec<TicketSale>,
}

/// Yields transactions until exactly `rows` tickets have been produced. The
/// last transaction is truncated to fit the remaining budget.
pub struct FactGenerator<'a, R> {
    rng: &'a mut R,
    pools: &'a KeyPools,
    pricing: &'a Pricing,
    remaining: u64,
    next_ticket_id: i64,
    next_transaction_id: i64,
}

impl<'a, R: Rng> FactGenerator<'a, R> {
    pub fn try_new(
        rng: &'a mut R,
        pools: &'a KeyPools,
        pricing: &'a Pricing,
        rows: u64,
    ) -> Result<Self> {
        pools.validate()?;
        pricing.validate()?;

        Ok(Self {
            rng,
            pools,
            pricing,
            remaining: rows,
            next_ticket_id: 1,
            next_transaction_id: 1,
        })
    }

    fn base_price(&mut self, promotion: PromotionKey, channel: ChannelKey) -> f64 {
        let p = self.pricing;
        let mut price = self.rng.gen_range(p.base_min..p.base_max);
        if channel.channel_type == ChannelType::Online {
            price += self.rng.gen_range(p.online_adjust_min..p.online_adjust_max);
        }
        if promotion.is_discount && self.rng.gen::<f64>() < p.promotion_probability {
            price *= self.rng.gen_range(p.markdown_min..p.markdown_max);
        }

        price
    }

    fn ticket_price(&mut self, base: f64) -> Decimal {
        let jitter = self.pricing.jitter;
        let price = (base + self.rng.gen_range(-jitter..jitter)).max(self.pricing.floor);
        Decimal::new((price * 100.0).round() as i64, 2)
    }
}

impl<'a, R: Rng> Iterator for FactGenerator<'a, R> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let size = self
            .rng
            .gen_range(1..=self.pricing.max_tickets_per_transaction)
            .min(self.remaining);

        let pools = self.pools;
        let date_key = *vocab::pick(self.rng, &pools.dates);
        let time_key = *vocab::pick(self.rng, &pools.times);
        let customer_key = *vocab::pick(self.rng, &pools.customers);
        let promotion = *vocab::pick(self.rng, &pools.promotions);
        let channel = *vocab::pick(self.rng, &pools.channels);
        let showing_key = *vocab::pick(self.rng, &pools.showings);

        let base = self.base_price(promotion, channel);
        let transaction_id = self.next_transaction_id;
        let mut tickets = Vec::with_capacity(size as usize);
        for _ in 0..size {
            let ticket_price = self.ticket_price(base);
            tickets.push(TicketSale {
                ticket_id: self.next_ticket_id,
                transaction_id,
                date_key,
                time_key,
                customer_key,
                promotion_key: promotion.key,
                channel_key: channel.key,
                showing_key,
                ticket_price,
                ticket_count: 1,
            });
            self.next_ticket_id += 1;
        }

        self.next_transaction_id += 1;
        self.remaining -= size;

        Some(Transaction {
            transaction_id,
            tickets,
        })
    }
}
