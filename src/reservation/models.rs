#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Called,
    Done,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Called => "Called",
            Self::Done => "Done",
        }
    }
}

/// Reservation data as it comes out of intake, before it joins the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub name: String,
    pub phone: String,
    pub people: u32,
    pub note: Option<String>,
    pub time: String,
}

impl NewReservation {
    pub fn new(name: String, phone: String, people: u32, note: Option<String>, time: String) -> Self {
        Self {
            name,
            phone,
            people,
            note,
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub phone: String,
    pub people: u32,
    pub note: Option<String>,
    pub time: String,
    pub status: Status,
}

impl Reservation {
    pub fn waiting(input: NewReservation) -> Self {
        Self {
            name: input.name,
            phone: input.phone,
            people: input.people,
            note: input.note,
            time: input.time,
            status: Status::Waiting,
        }
    }

    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Display ID: `RSVT-` + last four of the phone + first two of the name + `Q`.
    pub fn reservation_id(&self) -> String {
        let phone_chars: Vec<char> = self.phone.chars().collect();
        let phone_tail: String = phone_chars[phone_chars.len().saturating_sub(4)..].iter().collect();
        let name_head: String = self.name.chars().take(2).collect::<String>().to_uppercase();
        format!("RSVT-{}{}Q", phone_tail, name_head)
    }

    pub fn date_part(&self) -> &str {
        self.time.split(',').next().unwrap_or("").trim()
    }

    pub fn time_part(&self) -> &str {
        self.time.split_once(',').map(|(_, rest)| rest.trim()).unwrap_or("")
    }
}
