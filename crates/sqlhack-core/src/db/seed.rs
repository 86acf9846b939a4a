//! The fixed dataset every run starts from.

use crate::models::{Employee, Facility, SecurityLog};

pub const EMPLOYEES: &[Employee] = &[
    Employee {
        id: 1,
        name: "Marcus Steel",
        department: "Security",
        clearance_level: 3,
        shift_start: "22:00",
        shift_end: "06:00",
        weakness: "coffee addiction",
    },
    Employee {
        id: 2,
        name: "Sarah Chen",
        department: "IT",
        clearance_level: 4,
        shift_start: "09:00",
        shift_end: "17:00",
        weakness: "fear of spiders",
    },
    Employee {
        id: 3,
        name: "Viktor Petrov",
        department: "Executive",
        clearance_level: 5,
        shift_start: "08:00",
        shift_end: "18:00",
        weakness: "gambling problem",
    },
    Employee {
        id: 4,
        name: "Elena Rodriguez",
        department: "Security",
        clearance_level: 2,
        shift_start: "06:00",
        shift_end: "14:00",
        weakness: "claustrophobia",
    },
    Employee {
        id: 5,
        name: "David Kim",
        department: "Research",
        clearance_level: 4,
        shift_start: "10:00",
        shift_end: "22:00",
        weakness: "perfectionist",
    },
];

pub const SECURITY_LOGS: &[SecurityLog] = &[
    SecurityLog {
        id: 1,
        employee_id: 1,
        location: "Main Gate",
        access_time: "23:30",
        action: "patrol_start",
    },
    SecurityLog {
        id: 2,
        employee_id: 1,
        location: "Corridor A",
        access_time: "00:15",
        action: "patrol_check",
    },
    SecurityLog {
        id: 3,
        employee_id: 1,
        location: "Break Room",
        access_time: "01:00",
        action: "break",
    },
    SecurityLog {
        id: 4,
        employee_id: 4,
        location: "Main Gate",
        access_time: "07:00",
        action: "patrol_start",
    },
    SecurityLog {
        id: 5,
        employee_id: 3,
        location: "Executive Suite",
        access_time: "09:30",
        action: "meeting",
    },
];

pub const FACILITIES: &[Facility] = &[
    Facility {
        id: 1,
        room_name: "Server Room",
        floor: 3,
        security_level: 5,
        guard_id: 1,
    },
    Facility {
        id: 2,
        room_name: "Executive Suite",
        floor: 5,
        security_level: 4,
        guard_id: 3,
    },
    Facility {
        id: 3,
        room_name: "Research Lab",
        floor: 2,
        security_level: 3,
        guard_id: 5,
    },
    Facility {
        id: 4,
        room_name: "Security Office",
        floor: 1,
        security_level: 2,
        guard_id: 4,
    },
];
