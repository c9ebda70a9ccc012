/// Highest score a session can reach.
pub const MAX_SCORE: u32 = 20;

/// Running score for one session, kept within `0..=MAX_SCORE`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    current: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.current
    }

    /// Out-of-range values are ignored and the previous score is kept.
    /// Returns whether the value was applied.
    pub fn set(&mut self, score: u32) -> bool {
        if score > MAX_SCORE {
            log::debug!("ignoring out-of-range score {score}, keeping {}", self.current);
            return false;
        }
        self.current = score;
        true
    }

    pub fn increment(&mut self) -> bool {
        self.set(self.current.saturating_add(1))
    }
}

/// Final ranking of a session. Ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    Alien,
    Outsider,
    Disciple,
    Elite,
    Expert,
    Master,
    Creator,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::Alien,
        Grade::Outsider,
        Grade::Disciple,
        Grade::Elite,
        Grade::Expert,
        Grade::Master,
        Grade::Creator,
    ];

    /// Bands are inclusive-lower, exclusive-upper; only a perfect score
    /// reaches `Creator`.
    pub fn for_score(score: u32) -> Self {
        match score {
            0..5 => Grade::Alien,
            5..10 => Grade::Outsider,
            10..14 => Grade::Disciple,
            14..16 => Grade::Elite,
            16..18 => Grade::Expert,
            18..20 => Grade::Master,
            _ => Grade::Creator,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Grade::Alien => "ALIEN",
            Grade::Outsider => "OUTSIDER",
            Grade::Disciple => "DISCIPLE",
            Grade::Elite => "ELITE",
            Grade::Expert => "EXPERT",
            Grade::Master => "MASTER",
            Grade::Creator => "CREATOR",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Creator => {
                "GERMAN TENSE HAS NO SECRET FOR YOU ! YOU ARE THE PERFECTION IN HIS EYES !"
            }
            Grade::Master => {
                "GERMAN TENSE IS AS SIMPLE AS SAYING \"HELLO\" FOR YOU ! \
                 YOU CAN STOP HERE BUT REMEMBER: PERFECTION IS AT THE NEXT DOOR !"
            }
            Grade::Expert => {
                "GERMAN TENSE RECOGNISES YOU AS A SKILLFULL PERSON ! \
                 YOU ARE NOT FAR FROM PERFECTION !"
            }
            Grade::Elite => {
                "GERMAN TENSE HAS ALREADY RECOGNISED YOU AS A GENIUS ! \
                 BUT THE ROAD IS STILL LONG TO REACH PERFECTION"
            }
            Grade::Disciple => {
                "GERMAN TENSE HAS RECOGNISED YOUR POTENTIAL ! \
                 A LONG ROAD IS WATING FOR YOU TO REACH THE PERFECTION !"
            }
            Grade::Outsider => {
                "GERMAN TENSE HAS RECOGNISED YOU AS A POTENTIAL TALENT ! \
                 A LONG ROAD IS WATING FOR YOU TO REACH THE PERFECTION !"
            }
            Grade::Alien => {
                "ERROR ERROR ERROR GERMAN TENSE DOES NOT RECOGNISE YOU ! \
                 PLEASE UPGRADE YOURSELF IF YOU WANT HIS RECOGNITION !"
            }
        }
    }
}
