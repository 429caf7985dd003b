use super::{Question, Topic};

pub static QUESTIONS: &[Question] = &[
    Question {
        id: "q1",
        prompt: "In FCFS scheduling, which process gets CPU first?",
        options: [
            "The process with shortest burst time",
            "The process that arrives first",
            "The process with highest priority",
            "Random selection",
        ],
        correct_index: 1,
        explanation: "FCFS (First Come First Serve) allocates CPU to processes in the order they arrive in the ready queue.",
        topic: Topic::Fcfs,
    },
    Question {
        id: "q2",
        prompt: "What is the main disadvantage of FCFS scheduling?",
        options: [
            "Complex implementation",
            "Starvation of short processes",
            "Convoy effect (short processes wait for long ones)",
            "Requires priority assignment",
        ],
        correct_index: 2,
        explanation: "The convoy effect occurs when short processes get stuck behind long ones, leading to poor average waiting time.",
        topic: Topic::Fcfs,
    },
    Question {
        id: "q3",
        prompt: "First Fit memory allocation searches for:",
        options: [
            "The smallest block that fits the process",
            "The largest available block",
            "The first block large enough to fit the process",
            "A block of exact size",
        ],
        correct_index: 2,
        explanation: "First Fit allocates the first memory block that is large enough to accommodate the process.",
        topic: Topic::FirstFit,
    },
    Question {
        id: "q4",
        prompt: "What is internal fragmentation?",
        options: [
            "Unused memory outside allocated blocks",
            "Unused memory inside an allocated block",
            "Memory corruption",
            "Process overflow",
        ],
        correct_index: 1,
        explanation: "Internal fragmentation is the wasted space inside an allocated memory block when the process doesn't use the entire block.",
        topic: Topic::FirstFit,
    },
    Question {
        id: "q5",
        prompt: "Is FCFS a preemptive scheduling algorithm?",
        options: [
            "Yes, it can interrupt running processes",
            "No, once a process starts it runs to completion",
            "Only for I/O bound processes",
            "Depends on the OS implementation",
        ],
        correct_index: 1,
        explanation: "FCFS is non-preemptive. Once a process gets the CPU, it runs until it finishes or blocks for I/O.",
        topic: Topic::Fcfs,
    },
    Question {
        id: "q6",
        prompt: "What happens in First Fit if no block is large enough?",
        options: [
            "The process is split across blocks",
            "The largest block is used anyway",
            "The process cannot be allocated (must wait)",
            "Memory is automatically expanded",
        ],
        correct_index: 2,
        explanation: "If no suitable block is found, the process cannot be allocated and must wait until memory becomes available.",
        topic: Topic::FirstFit,
    },
];
