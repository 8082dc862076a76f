pub mod configuration;

pub mod bridge {
    pub mod bridge;
    pub mod bridgeerror;
    pub mod bridgerequest;
    pub mod yearbridges;
    pub mod bridgescanner;
    pub mod bridgescorer;
    pub mod bridgeselector;
    pub mod bridgeplanner;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod recurringholidaymanager;
    }

    pub mod calendar {
        pub mod weeklyoffdays;
        pub mod localholiday;
        pub mod nationalcalendar;
        pub mod holidayregistry;
        pub mod holidaycalendar;
    }
}
