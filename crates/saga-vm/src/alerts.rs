//! One-tick event alerts.
//!
//! The surrounding engine records what happened to an entity since its
//! last think — spawned, attacked, bumped, killed and so on — as bits
//! the script queries through `If…` predicates. The whole set clears at
//! the end of each think, surviving only as a possible `CHANGED` reseed.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Alerts: u32 {
        const SPAWNED          = 1 << 0;
        const HIT_VULNERABLE   = 1 << 1;
        const AT_WAYPOINT      = 1 << 2;
        const AT_LAST_WAYPOINT = 1 << 3;
        const ATTACKED         = 1 << 4;
        const BUMPED           = 1 << 5;
        const ORDERED          = 1 << 6;
        const CALLED_FOR_HELP  = 1 << 7;
        const KILLED           = 1 << 8;
        const TARGET_KILLED    = 1 << 9;
        const DROPPED          = 1 << 10;
        const GRABBED          = 1 << 11;
        const REAFFIRMED       = 1 << 12;
        const LEADER_KILLED    = 1 << 13;
        const USED             = 1 << 14;
        const CLEANED_UP       = 1 << 15;
        const SCORED_A_HIT     = 1 << 16;
        const HEALED           = 1 << 17;
        const DISAFFIRMED      = 1 << 18;
        const CHANGED          = 1 << 19;
        const IN_WATER         = 1 << 20;
        const BORED            = 1 << 21;
        const TOO_MUCH_BAGGAGE = 1 << 22;
        const GROGGED          = 1 << 23;
        const DAZED            = 1 << 24;
        const HIT_GROUND       = 1 << 25;
        const NOT_DROPPED      = 1 << 26;
        const BLOCKED          = 1 << 27;
        const THROWN           = 1 << 28;
        const CRUSHED          = 1 << 29;
        const NOT_PUT_AWAY     = 1 << 30;
        const TAKEN_OUT        = 1 << 31;
    }
}
